use super::{DeclarationRequest, DeclarationStrategy};
use crate::analyzer::TypeAnalyzer;
use crate::context::ExtractorContext;
use crate::error::AnalysisResult;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::Declaration;

/// Type aliases take the shape of their aliased type, renamed to the alias
///
/// A union alias is reshaped as an object whose properties are the union's
/// elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeAliasStrategy;

impl DeclarationStrategy for TypeAliasStrategy {
    fn name(&self) -> &'static str {
        "type-alias"
    }

    fn can_handle(&self, declaration: &Declaration) -> bool {
        matches!(declaration, Declaration::TypeAlias(_))
    }

    fn analyze(
        &self,
        declaration: &Declaration,
        request: &DeclarationRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        let Declaration::TypeAlias(alias) = declaration else {
            return Ok(None);
        };

        let scope = request.bind_type_params(declaration, ctx.file_path(), options);
        let body_options = options.nested().with_generic_context(scope);

        let Some(mut info) = analyzer.analyze(request.name, &alias.ty, ctx, &body_options) else {
            return Ok(Some(PropertyFactory::fallback(
                request.name,
                &alias.name,
                options,
            )));
        };

        if info.is_union() {
            info = info.into_object_shape();
        }
        // The alias speaks for itself, even when it has no doc comment
        info.type_as_string = alias.name.clone();
        info.documentation = alias.documentation.clone();
        info.is_optional |= options.is_optional;
        info.is_array |= options.is_array;

        Ok(Some(info))
    }
}
