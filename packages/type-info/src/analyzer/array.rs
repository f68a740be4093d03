use super::{TypeAnalyzer, TypeStrategy};
use crate::context::ExtractorContext;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::{TypeKind, TypeNode, TypeOperator};

/// `T[]`, `Array<T>`, `ReadonlyArray<T>` and their `readonly` forms
///
/// Arrays are flattened into their element with `isArray` set; nested
/// arrays keep a single flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayStrategy;

impl TypeStrategy for ArrayStrategy {
    fn name(&self) -> &'static str {
        "array"
    }

    fn can_handle(&self, node: &TypeNode) -> bool {
        element_type(node).is_some()
    }

    fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo> {
        let element = element_type(node)?;
        analyzer.analyze(name, element, ctx, &options.nested().with_array(true))
    }
}

/// The element type if `node` is an array type
pub fn element_type(node: &TypeNode) -> Option<&TypeNode> {
    match &node.unparenthesized().kind {
        TypeKind::Array(element) => Some(element),
        TypeKind::Reference { name, type_args }
            if type_args.len() == 1 && matches!(name.as_str(), "Array" | "ReadonlyArray") =>
        {
            type_args.first()
        }
        TypeKind::Operator {
            operator: TypeOperator::Readonly,
            ty,
        } => element_type(ty),
        _ => None,
    }
}
