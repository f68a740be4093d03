use super::{TypeAnalyzer, TypeStrategy};
use crate::context::ExtractorContext;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::{TupleElement, TypeKind, TypeNode, TypeOperator};

/// Tuples become objects keyed by element label, or by position when
/// unlabeled
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleStrategy;

impl TypeStrategy for TupleStrategy {
    fn name(&self) -> &'static str {
        "tuple"
    }

    fn can_handle(&self, node: &TypeNode) -> bool {
        tuple_elements(node).is_some()
    }

    fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo> {
        let elements = tuple_elements(node)?;

        let properties = elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                let element_name = element
                    .label
                    .clone()
                    .unwrap_or_else(|| index.to_string());
                let element_options = options
                    .nested()
                    .with_optional(element.optional)
                    .with_array(element.rest);
                analyzer.analyze(&element_name, &element.ty, ctx, &element_options)
            })
            .collect();

        Some(PropertyFactory::object(name, properties, &node.text, options))
    }
}

fn tuple_elements(node: &TypeNode) -> Option<&[TupleElement]> {
    match &node.unparenthesized().kind {
        TypeKind::Tuple(elements) => Some(elements),
        TypeKind::Operator {
            operator: TypeOperator::Readonly,
            ty,
        } => tuple_elements(ty),
        _ => None,
    }
}
