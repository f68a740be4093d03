use super::{TypeAnalyzer, TypeStrategy};
use crate::context::ExtractorContext;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::{TypeKind, TypeNode};

/// Unions keep every analyzable member as an unnamed element, in order
#[derive(Debug, Clone, Copy, Default)]
pub struct UnionStrategy;

impl TypeStrategy for UnionStrategy {
    fn name(&self) -> &'static str {
        "union"
    }

    fn can_handle(&self, node: &TypeNode) -> bool {
        matches!(node.kind, TypeKind::Union(_))
    }

    fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo> {
        let TypeKind::Union(members) = &node.kind else {
            return None;
        };

        let member_options = options.nested();
        let elements = members
            .iter()
            .filter_map(|member| analyzer.analyze("", member, ctx, &member_options))
            .collect();

        Some(PropertyFactory::union(name, elements, &node.text, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{LiteralValue, PropertyType};
    use fluent_gen_parser::parse_type;
    use fluent_gen_project::Project;

    fn analyze(text: &str) -> PropertyInfo {
        let project = Project::new();
        let mut ctx = ExtractorContext::new(&project, "/a.ts");
        let node = parse_type(text).unwrap();
        TypeAnalyzer::new()
            .analyze("status", &node, &mut ctx, &AnalyzeOptions::default())
            .unwrap()
    }

    #[test]
    fn test_literal_union_keeps_order() {
        let info = analyze("\"active\" | \"inactive\"");
        let values: Vec<_> = info.children().iter().filter_map(|e| e.value()).collect();

        assert!(info.is_union());
        assert_eq!(info.type_as_string, "\"active\" | \"inactive\"");
        assert_eq!(
            values,
            vec![
                &LiteralValue::String("active".into()),
                &LiteralValue::String("inactive".into())
            ]
        );
        assert!(info.children().iter().all(|e| e.name.is_empty()));
    }

    #[test]
    fn test_nullable_members_are_kept() {
        let info = analyze("string | null | undefined");
        assert_eq!(info.children().len(), 3);
        assert_eq!(info.children()[2].property_type(), PropertyType::Unknown);
    }

    #[test]
    fn test_function_members_are_dropped() {
        let info = analyze("string | (() => void)");
        assert_eq!(info.children().len(), 1);
    }
}
