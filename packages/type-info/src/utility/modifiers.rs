use super::{resolve_object, UtilityRequest, UtilityTypeExpander};
use crate::analyzer::TypeAnalyzer;
use crate::context::ExtractorContext;
use crate::error::AnalysisResult;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    Partial,
    Required,
    Readonly,
}

/// `Partial<T>`, `Required<T>` and `Readonly<T>`
///
/// Rewrites the optional flag of each top-level property of `T`. Readonly
/// has no builder representation and keeps `T` as is.
#[derive(Debug, Clone, Copy)]
pub struct ModifierExpander {
    modifier: Modifier,
}

impl ModifierExpander {
    pub fn partial() -> Self {
        Self {
            modifier: Modifier::Partial,
        }
    }

    pub fn required() -> Self {
        Self {
            modifier: Modifier::Required,
        }
    }

    pub fn readonly() -> Self {
        Self {
            modifier: Modifier::Readonly,
        }
    }
}

impl UtilityTypeExpander for ModifierExpander {
    fn arity(&self) -> usize {
        1
    }

    fn expand(
        &self,
        request: &UtilityRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        let [source] = request.type_args else {
            return Ok(None);
        };
        let Some(object) = resolve_object(source, ctx, options, analyzer) else {
            return Ok(None);
        };

        let documentation = object.documentation.clone();
        let accepts_unknown_properties = object.accepts_unknown_properties;
        let mut properties = object.into_children();
        for property in &mut properties {
            match self.modifier {
                Modifier::Partial => property.is_optional = true,
                Modifier::Required => property.is_optional = false,
                Modifier::Readonly => {}
            }
        }

        let mut result =
            PropertyFactory::object(request.name, properties, request.type_as_string, options)
                .with_documentation(documentation);
        result.accepts_unknown_properties = accepts_unknown_properties;
        Ok(Some(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_gen_parser::parse_type;
    use fluent_gen_project::Project;

    fn analyze(text: &str) -> PropertyInfo {
        let mut project = Project::new();
        project
            .add_source("/a.ts", "interface Config { host: string; port?: number }")
            .unwrap();
        let mut ctx = ExtractorContext::new(&project, "/a.ts");
        let node = parse_type(text).unwrap();
        TypeAnalyzer::new()
            .analyze("config", &node, &mut ctx, &AnalyzeOptions::default())
            .unwrap()
    }

    #[test]
    fn test_partial_marks_all_optional() {
        let info = analyze("Partial<Config>");
        assert!(info.children().iter().all(|p| p.is_optional));
        assert_eq!(info.type_as_string, "Partial<Config>");
    }

    #[test]
    fn test_required_clears_optional() {
        let info = analyze("Required<Config>");
        assert!(info.children().iter().all(|p| !p.is_optional));
    }

    #[test]
    fn test_readonly_is_identity() {
        let info = analyze("Readonly<Config>");
        assert!(!info.property("host").unwrap().is_optional);
        assert!(info.property("port").unwrap().is_optional);
    }

    #[test]
    fn test_nested_utilities() {
        let info = analyze(r#"Partial<Omit<Config, "port">>"#);
        assert_eq!(info.children().len(), 1);
        assert!(info.property("host").unwrap().is_optional);
    }
}
