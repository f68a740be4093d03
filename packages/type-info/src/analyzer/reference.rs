use super::{TypeAnalyzer, TypeStrategy};
use crate::context::{Dependency, DiagnosticKind, ExtractorContext};
use crate::declarations::DeclarationRequest;
use crate::error::AnalysisResult;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use crate::utility::UtilityRequest;
use fluent_gen_parser::{TypeKind, TypeNode};
use tracing::trace;

/// Named type references
///
/// Resolution order:
/// 1. a bound type parameter
/// 2. a registered utility type
/// 3. a declaration in the project, recording a local dependency
/// 4. a declaration in a package, through the external resolver
/// 5. the constraint of an unbound type parameter
///
/// Whatever is left is reported and becomes a fallback. Analysis errors of
/// the resolved declaration are recovered here as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceStrategy;

impl TypeStrategy for ReferenceStrategy {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn can_handle(&self, node: &TypeNode) -> bool {
        matches!(node.kind, TypeKind::Reference { .. })
    }

    fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo> {
        let TypeKind::Reference {
            name: type_name,
            type_args,
        } = &node.kind
        else {
            return None;
        };

        match resolve_reference(name, node, type_name, type_args, ctx, options, analyzer) {
            Ok(info) => info,
            Err(error) => {
                ctx.warn(
                    DiagnosticKind::AnalysisFailure,
                    format!("Failed to analyze '{}' for property '{}': {}", node.text, name, error),
                );
                Some(PropertyFactory::fallback(name, &node.text, options))
            }
        }
    }
}

fn resolve_reference(
    name: &str,
    node: &TypeNode,
    type_name: &str,
    type_args: &[TypeNode],
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
) -> AnalysisResult<Option<PropertyInfo>> {
    if type_args.is_empty() {
        if let Some(binding) = options.generic_context.lookup(type_name) {
            trace!(parameter = type_name, bound = %binding.node.text, "Substituting type parameter");
            let bound_options = options
                .nested()
                .with_generic_context(binding.scope.clone());
            let info = ctx.in_file(binding.file_path.clone(), |ctx| {
                analyzer.analyze(name, &binding.node, ctx, &bound_options)
            });
            return Ok(info);
        }
    }

    if analyzer.utilities().is_utility_type(type_name) {
        let request = UtilityRequest {
            name,
            type_args,
            type_as_string: &node.text,
        };
        return analyzer
            .utilities()
            .expand(type_name, &request, ctx, options, analyzer);
    }

    let request =
        DeclarationRequest::new(name, &node.text, ctx.file_path()).with_type_args(type_args);

    if let Some(symbol) = analyzer.symbol_resolver().resolve(type_name, ctx) {
        ctx.add_dependency(Dependency {
            target: symbol.target.clone(),
            dependency: type_name.to_string(),
        });
        return analyzer.declarations().analyze(
            symbol.declaration,
            &symbol.file_path,
            &request,
            ctx,
            options,
            analyzer,
        );
    }

    if let Some(info) = analyzer
        .external_resolver()
        .resolve(type_name, &request, ctx, options, analyzer)?
    {
        return Ok(Some(info));
    }

    if type_args.is_empty() && looks_like_type_parameter(type_name) {
        let constraint = ctx
            .current_declaration()
            .and_then(|declaration| declaration.find_type_param(type_name))
            .and_then(|param| param.constraint.as_ref());
        if let Some(constraint) = constraint {
            return Ok(analyzer.analyze(name, constraint, ctx, &options.nested()));
        }
    }

    ctx.warn(
        DiagnosticKind::UnresolvedType,
        format!("Could not resolve type '{}' for property '{}'", type_name, name),
    );
    Ok(None)
}

/// `T`, `K`, `TValue`: names conventionally used for type parameters
pub fn looks_like_type_parameter(name: &str) -> bool {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(first), None) => first.is_ascii_uppercase(),
        (Some('T'), Some(second)) => {
            second.is_ascii_uppercase() && name.chars().all(|c| c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
