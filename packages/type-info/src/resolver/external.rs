use crate::analyzer::TypeAnalyzer;
use crate::context::{Dependency, DependencyTarget, ExtractorContext};
use crate::declarations::DeclarationRequest;
use crate::error::AnalysisResult;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_project::ModuleTarget;
use tracing::debug;

/// Resolves references that point into packages
///
/// Implementations return `Ok(None)` when the name is not theirs to resolve;
/// the reference analyzer then moves on to its next step.
pub trait ExternalTypeResolver {
    fn resolve(
        &self,
        type_name: &str,
        request: &DeclarationRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>>;
}

/// Follows imports of the current file into declaration files found in the
/// project's module directories
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleTypeResolver;

impl ExternalTypeResolver for ModuleTypeResolver {
    fn resolve(
        &self,
        type_name: &str,
        request: &DeclarationRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        let project = ctx.project();
        let Some(file) = project.file(ctx.file_path()) else {
            return Ok(None);
        };

        let (specifier, exported) = if let Some((namespace, member)) = type_name.split_once('.') {
            match file.find_namespace_import(namespace) {
                Some(import) => (import.specifier.as_str(), member),
                None => return Ok(None),
            }
        } else if let Some((import, spec)) = file.find_named_import(type_name) {
            (import.specifier.as_str(), spec.imported.as_str())
        } else if let Some(import) = file.find_default_import(type_name) {
            (import.specifier.as_str(), "default")
        } else {
            return Ok(None);
        };

        let Some(ModuleTarget::External { specifier, path }) =
            project.resolve_import(ctx.file_path(), specifier)
        else {
            return Ok(None);
        };

        let Some((declaration, file_path)) = project.find_exported_declaration(&path, exported)
        else {
            debug!(
                name = %type_name,
                module = %specifier,
                "Package does not export type"
            );
            return Ok(None);
        };

        ctx.add_dependency(Dependency {
            target: DependencyTarget::External { name: specifier },
            dependency: type_name.to_string(),
        });

        analyzer
            .declarations()
            .analyze(declaration, &file_path, request, ctx, options, analyzer)
    }
}
