use crate::analyzer::TypeAnalyzer;
use crate::context::{Dependency, Diagnostic, ExtractorContext};
use crate::declarations::DeclarationRequest;
use crate::error::ExtractError;
use crate::factory::PropertyFactory;
use crate::options::ExtractorOptions;
use crate::property::{LiteralValue, PropertyInfo, PropertyType};
use crate::resolver::SymbolResolver;
use fluent_gen_parser::DeclarationKind;
use fluent_gen_project::Project;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// The builder-facing description of one declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedType {
    pub name: String,
    pub kind: DeclarationKind,
    #[serde(rename = "type")]
    pub type_: PropertyType,
    pub type_as_string: String,
    pub properties: Vec<PropertyInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub file_path: PathBuf,
    pub dependencies: Vec<Dependency>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub accepts_unknown_properties: bool,
    /// Member values of an enum
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<LiteralValue>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Extracts declarations of one project file into property trees
///
/// ```rust,ignore
/// let mut project = Project::new();
/// let path = project.load_file("src/types.ts")?;
///
/// let mut extractor = InterfaceExtractor::new(&project, &path);
/// let button = extractor.extract("ButtonProps")?;
/// for property in &button.properties {
///     println!("{}: {}", property.name, property.type_as_string);
/// }
/// ```
pub struct InterfaceExtractor<'p> {
    project: &'p Project,
    file_path: PathBuf,
    options: ExtractorOptions,
    analyzer: TypeAnalyzer,
    /// State of the most recent extraction
    context: Option<ExtractorContext<'p>>,
}

impl<'p> InterfaceExtractor<'p> {
    pub fn new(project: &'p Project, file_path: impl AsRef<Path>) -> Self {
        let file_path = project
            .file_key(file_path.as_ref())
            .unwrap_or_else(|| file_path.as_ref().to_path_buf());
        Self {
            project,
            file_path,
            options: ExtractorOptions::default(),
            analyzer: TypeAnalyzer::new(),
            context: None,
        }
    }

    pub fn with_options(mut self, options: ExtractorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Extract the declaration `type_name` of the extractor's file
    #[instrument(skip(self), fields(file = %self.file_path.display()))]
    pub fn extract(&mut self, type_name: &str) -> Result<ExtractedType, ExtractError> {
        let project = self.project;
        let file = project
            .file(&self.file_path)
            .ok_or_else(|| ExtractError::FileNotLoaded {
                file_path: self.file_path.clone(),
            })?;

        let Some(declaration) = file.find_declaration(type_name) else {
            let names = file.declaration_names();
            let available = if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            };
            return Err(ExtractError::TypeNotFound {
                name: type_name.to_string(),
                file_path: self.file_path.clone(),
                available,
            });
        };

        let mut ctx = ExtractorContext::new(project, self.file_path.clone());
        let options = self.options.analyze_options();
        let request = DeclarationRequest::new(type_name, type_name, &self.file_path);

        let root = self
            .analyzer
            .declarations()
            .analyze(
                declaration,
                &self.file_path,
                &request,
                &mut ctx,
                &options,
                &self.analyzer,
            )?
            .unwrap_or_else(|| PropertyFactory::fallback(type_name, type_name, &options));

        debug!(
            properties = root.children().len(),
            dependencies = ctx.dependencies().len(),
            warnings = ctx.diagnostics().len(),
            "Extracted {}",
            type_name
        );

        let extracted = ExtractedType {
            name: type_name.to_string(),
            kind: declaration.kind(),
            type_: root.property_type(),
            type_as_string: root.type_as_string.clone(),
            documentation: root.documentation.clone(),
            file_path: self.file_path.clone(),
            dependencies: ctx.dependencies().to_vec(),
            accepts_unknown_properties: root.accepts_unknown_properties,
            values: root.values().map(<[LiteralValue]>::to_vec),
            properties: root.into_children(),
        };

        self.context = Some(ctx);
        Ok(extracted)
    }

    /// Extract every interface, type alias and enum of the file, in order
    pub fn extract_all(&mut self) -> Result<Vec<ExtractedType>, ExtractError> {
        let project = self.project;
        let file = project
            .file(&self.file_path)
            .ok_or_else(|| ExtractError::FileNotLoaded {
                file_path: self.file_path.clone(),
            })?;

        let names: Vec<&str> = file.declaration_names();
        info!(count = names.len(), file = %self.file_path.display(), "Extracting all declarations");

        names.into_iter().map(|name| self.extract(name)).collect()
    }

    /// Context of the most recent extraction
    pub fn context(&self) -> Option<&ExtractorContext<'p>> {
        self.context.as_ref()
    }

    /// Warnings of the most recent extraction
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.context
            .as_ref()
            .map(ExtractorContext::diagnostics)
            .unwrap_or_default()
    }

    pub fn analyzer(&self) -> &TypeAnalyzer {
        &self.analyzer
    }

    pub fn analyzer_mut(&mut self) -> &mut TypeAnalyzer {
        &mut self.analyzer
    }

    pub fn symbol_resolver(&self) -> &SymbolResolver {
        self.analyzer.symbol_resolver()
    }
}
