use super::{extract_keys, resolve_object, UtilityRequest, UtilityTypeExpander};
use crate::analyzer::TypeAnalyzer;
use crate::context::{DiagnosticKind, ExtractorContext};
use crate::error::AnalysisResult;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;

/// `Pick<T, K>`: the properties of `T` named by `K`, in `T`'s order
#[derive(Debug, Clone, Copy, Default)]
pub struct PickExpander;

/// `Omit<T, K>`: the properties of `T` not named by `K`
#[derive(Debug, Clone, Copy, Default)]
pub struct OmitExpander;

impl UtilityTypeExpander for PickExpander {
    fn arity(&self) -> usize {
        2
    }

    fn expand(
        &self,
        request: &UtilityRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        filter_properties(request, ctx, options, analyzer, true)
    }
}

impl UtilityTypeExpander for OmitExpander {
    fn arity(&self) -> usize {
        2
    }

    fn expand(
        &self,
        request: &UtilityRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        filter_properties(request, ctx, options, analyzer, false)
    }
}

fn filter_properties(
    request: &UtilityRequest<'_>,
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
    keep_named: bool,
) -> AnalysisResult<Option<PropertyInfo>> {
    let [source, keys] = request.type_args else {
        return Ok(None);
    };
    let Some(object) = resolve_object(source, ctx, options, analyzer) else {
        return Ok(None);
    };

    let documentation = object.documentation.clone();
    // Pick drops the index signature along with every unnamed key
    let accepts_unknown_properties = object.accepts_unknown_properties && !keep_named;

    let properties = match extract_keys(keys, ctx, options, analyzer) {
        Some(keys) => object
            .into_children()
            .into_iter()
            .filter(|property| keys.contains(&property.name) == keep_named)
            .collect(),
        None => {
            ctx.warn(
                DiagnosticKind::UnenumerableKeys,
                format!(
                    "Cannot enumerate keys '{}' of '{}'",
                    keys.text, request.type_as_string
                ),
            );
            if keep_named {
                Vec::new()
            } else {
                object.into_children()
            }
        }
    };

    let mut result =
        PropertyFactory::object(request.name, properties, request.type_as_string, options)
            .with_documentation(documentation);
    result.accepts_unknown_properties = accepts_unknown_properties;
    Ok(Some(result))
}
