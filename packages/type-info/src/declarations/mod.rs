//! Analysis of named declarations
//!
//! A reference that resolves to an interface, type alias or enum is turned
//! into a property by the matching [`DeclarationStrategy`]. Strategies run
//! with the context switched to the declaration's file, so names inside the
//! declaration resolve where they were written.

mod enumeration;
mod interface;
mod members;
mod type_alias;

pub use enumeration::EnumStrategy;
pub use interface::InterfaceStrategy;
pub use members::{analyze_members, MemberAnalysis};
pub use type_alias::TypeAliasStrategy;

use crate::analyzer::TypeAnalyzer;
use crate::context::ExtractorContext;
use crate::error::{AnalysisError, AnalysisResult};
use crate::generic_context::GenericContext;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::{Declaration, TypeNode};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a declaration is being used
#[derive(Debug, Clone)]
pub struct DeclarationRequest<'a> {
    /// Name of the resulting property
    pub name: &'a str,
    /// Type arguments written at the use site
    pub type_args: &'a [TypeNode],
    /// Text of the referencing type expression
    pub type_as_string: &'a str,
    /// File the reference is written in
    pub use_site_file: PathBuf,
}

impl<'a> DeclarationRequest<'a> {
    pub fn new(name: &'a str, type_as_string: &'a str, use_site_file: impl Into<PathBuf>) -> Self {
        Self {
            name,
            type_args: &[],
            type_as_string,
            use_site_file: use_site_file.into(),
        }
    }

    pub fn with_type_args(mut self, type_args: &'a [TypeNode]) -> Self {
        self.type_args = type_args;
        self
    }

    /// Bindings for `declaration`'s type parameters at this use site
    pub fn bind_type_params(
        &self,
        declaration: &Declaration,
        declaration_file: &Path,
        options: &AnalyzeOptions,
    ) -> GenericContext {
        GenericContext::for_declaration(
            declaration.type_params(),
            self.type_args,
            &self.use_site_file,
            &options.generic_context,
            declaration_file,
        )
    }
}

pub trait DeclarationStrategy {
    fn name(&self) -> &'static str;

    fn can_handle(&self, declaration: &Declaration) -> bool;

    fn analyze(
        &self,
        declaration: &Declaration,
        request: &DeclarationRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>>;
}

/// Dispatches declarations to their strategy
pub struct DeclarationAnalyzer {
    strategies: Vec<Box<dyn DeclarationStrategy>>,
}

impl Default for DeclarationAnalyzer {
    fn default() -> Self {
        Self {
            strategies: vec![
                Box::new(InterfaceStrategy),
                Box::new(TypeAliasStrategy),
                Box::new(EnumStrategy),
            ],
        }
    }
}

impl DeclarationAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strategies registered later are tried first
    pub fn register(&mut self, strategy: Box<dyn DeclarationStrategy>) {
        self.strategies.insert(0, strategy);
    }

    pub fn analyze<'p>(
        &self,
        declaration: &'p Declaration,
        declaration_file: &Path,
        request: &DeclarationRequest<'_>,
        ctx: &mut ExtractorContext<'p>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        let strategy = self
            .strategies
            .iter()
            .find(|strategy| strategy.can_handle(declaration))
            .ok_or_else(|| AnalysisError::NoDeclarationStrategy {
                kind: declaration.kind().to_string(),
                name: declaration.name().to_string(),
            })?;

        debug!(
            strategy = strategy.name(),
            declaration = declaration.name(),
            property = request.name,
            "Analyzing declaration"
        );

        ctx.in_declaration(declaration, declaration_file.to_path_buf(), |ctx| {
            strategy.analyze(declaration, request, ctx, options, analyzer)
        })
    }
}
