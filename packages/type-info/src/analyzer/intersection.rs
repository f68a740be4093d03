use super::{TypeAnalyzer, TypeStrategy};
use crate::context::{DiagnosticKind, ExtractorContext};
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::{TypeKind, TypeNode};

/// Intersections of object types merge into one object
///
/// Later operands override earlier properties of the same name, keeping
/// the earlier position. Any non-object operand makes the whole
/// intersection a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionStrategy;

impl TypeStrategy for IntersectionStrategy {
    fn name(&self) -> &'static str {
        "intersection"
    }

    fn can_handle(&self, node: &TypeNode) -> bool {
        matches!(node.kind, TypeKind::Intersection(_))
    }

    fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo> {
        let TypeKind::Intersection(operands) = &node.kind else {
            return None;
        };

        let operand_options = options.nested();
        let mut properties: Vec<PropertyInfo> = Vec::new();
        let mut accepts_unknown_properties = false;

        for operand in operands {
            let Some(object) = analyzer
                .analyze("", operand, ctx, &operand_options)
                .filter(PropertyInfo::is_object)
            else {
                ctx.warn(
                    DiagnosticKind::UnsupportedType,
                    format!(
                        "Intersection operand '{}' of '{}' is not an object",
                        operand.text, node.text
                    ),
                );
                return None;
            };

            accepts_unknown_properties |= object.accepts_unknown_properties;
            for property in object.into_children() {
                match properties.iter_mut().find(|p| p.name == property.name) {
                    Some(existing) => *existing = property,
                    None => properties.push(property),
                }
            }
        }

        let mut merged = PropertyFactory::object(name, properties, &node.text, options);
        merged.accepts_unknown_properties = accepts_unknown_properties;
        Some(merged)
    }
}
