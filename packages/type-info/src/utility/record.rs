use super::{extract_keys, resolve_type_node, UtilityRequest, UtilityTypeExpander};
use crate::analyzer::TypeAnalyzer;
use crate::context::ExtractorContext;
use crate::error::AnalysisResult;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::Keyword;

/// Name of the single property standing in for unenumerable record keys
pub const RECORD_VALUE_PROPERTY: &str = "value";

/// `Record<K, V>`
///
/// `Record<string, unknown>` (or `any`) is an open map with no properties.
/// Enumerable keys each become a property of type `V`; otherwise a single
/// `value` property describes the value type.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordExpander;

impl UtilityTypeExpander for RecordExpander {
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
        let [keys, value] = request.type_args else {
            return Ok(None);
        };

        // Bindings and aliases count: `Dict<unknown>` over `Record<string, V>` is open too
        let resolved_keys = resolve_type_node(keys, ctx, options, analyzer).node;
        let resolved_value = resolve_type_node(value, ctx, options, analyzer).node;
        let open_value = resolved_value.is_keyword(Keyword::Unknown)
            || resolved_value.is_keyword(Keyword::Any);
        if resolved_keys.is_keyword(Keyword::String) && open_value {
            return Ok(Some(PropertyFactory::open_object(
                request.name,
                request.type_as_string,
                options,
            )));
        }

        let value_options = options.nested();
        let properties = match extract_keys(keys, ctx, options, analyzer) {
            Some(keys) => keys
                .iter()
                .filter_map(|key| analyzer.analyze(key, value, ctx, &value_options))
                .collect(),
            None => analyzer
                .analyze(RECORD_VALUE_PROPERTY, value, ctx, &value_options)
                .into_iter()
                .collect(),
        };

        Ok(Some(PropertyFactory::object(
            request.name,
            properties,
            request.type_as_string,
            options,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyType;
    use fluent_gen_parser::parse_type;
    use fluent_gen_project::Project;

    fn analyze(source: &str, text: &str) -> PropertyInfo {
        let mut project = Project::new();
        project.add_source("/a.ts", source).unwrap();
        let mut ctx = ExtractorContext::new(&project, "/a.ts");
        let node = parse_type(text).unwrap();
        TypeAnalyzer::new()
            .analyze("map", &node, &mut ctx, &AnalyzeOptions::default())
            .unwrap()
    }

    #[test]
    fn test_open_map() {
        for text in ["Record<string, unknown>", "Record<string, any>"] {
            let info = analyze("", text);
            assert!(info.is_object());
            assert!(info.accepts_unknown_properties);
            assert!(info.children().is_empty());
        }
    }

    #[test]
    fn test_open_map_through_bindings_and_aliases() {
        let source = r#"
            type Dict<V> = Record<string, V>;
            type Key = string;
            type Anything = unknown;
            interface Holder<T> { map: Record<string, T> }
        "#;
        for text in [
            "Dict<unknown>",
            "Record<Key, unknown>",
            "Record<string, Anything>",
            "Holder<any>",
        ] {
            let mut info = analyze(source, text);
            if text.starts_with("Holder") {
                info = info.property("map").unwrap().clone();
            }
            assert!(info.accepts_unknown_properties, "{} should be open", text);
            assert!(info.children().is_empty(), "{} should have no properties", text);
        }
    }

    #[test]
    fn test_enumerable_keys() {
        let info = analyze(
            r#"type Size = "sm" | "lg";"#,
            "Record<Size, number>",
        );
        let names: Vec<&str> = info.children().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["sm", "lg"]);
        assert!(info
            .children()
            .iter()
            .all(|p| p.property_type() == PropertyType::Number));
        assert!(!info.accepts_unknown_properties);
    }

    #[test]
    fn test_enum_keys() {
        let info = analyze(
            r#"enum Color { Red = "red", Blue = "blue" }"#,
            "Record<Color, boolean>",
        );
        assert!(info.property("red").is_some());
        assert!(info.property("blue").is_some());
    }

    #[test]
    fn test_string_keys_with_typed_values() {
        let info = analyze("", "Record<string, number>");
        assert_eq!(info.children().len(), 1);
        let value = info.property(RECORD_VALUE_PROPERTY).unwrap();
        assert_eq!(value.property_type(), PropertyType::Number);
    }
}
