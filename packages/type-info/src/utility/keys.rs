use super::resolve::{resolve_type_node, ResolvedTypeNode};
use crate::analyzer::{looks_like_type_parameter, TypeAnalyzer};
use crate::context::{Dependency, ExtractorContext};
use crate::options::AnalyzeOptions;
use crate::property::LiteralValue;
use fluent_gen_parser::{Declaration, TypeKind, TypeNode, TypeOperator};

/// Enumerate the property keys a key type stands for
///
/// Understands literal types and unions of them (through aliases and type
/// parameter bindings), enums, `keyof T` and `Exclude`/`Extract` over key
/// sets. Returns `None` when the keys cannot be listed, e.g. for `string`.
pub fn extract_keys(
    node: &TypeNode,
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
) -> Option<Vec<String>> {
    let resolved = resolve_type_node(node, ctx, options, analyzer);
    keys_of(&resolved, ctx, options, analyzer, 0)
}

fn keys_of(
    resolved: &ResolvedTypeNode,
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
    depth: usize,
) -> Option<Vec<String>> {
    if depth >= options.max_depth {
        return None;
    }

    match &resolved.node.kind {
        TypeKind::Literal(literal) => Some(vec![literal.as_key()]),
        TypeKind::TemplateLiteral(raw) if !raw.contains("${") => {
            Some(vec![raw.trim_matches('`').to_string()])
        }
        TypeKind::Union(members) => {
            let mut keys = Vec::new();
            for member in members {
                let member = resolved
                    .member(member)
                    .resolve(ctx, analyzer, options.max_depth);
                for key in keys_of(&member, ctx, options, analyzer, depth + 1)? {
                    if !keys.contains(&key) {
                        keys.push(key);
                    }
                }
            }
            Some(keys)
        }
        TypeKind::Operator {
            operator: TypeOperator::KeyOf,
            ty,
        } => {
            let object = resolved
                .member(ty)
                .analyze("", ctx, &options.nested(), analyzer)
                .filter(|info| info.is_object())?;
            Some(object.children().iter().map(|p| p.name.clone()).collect())
        }
        TypeKind::Reference { name, type_args } => {
            let is_key_filter = type_args.len() == 2
                && matches!(name.as_str(), "Exclude" | "Extract")
                && analyzer.utilities().is_utility_type(name);
            if is_key_filter {
                let source = resolved
                    .member(&type_args[0])
                    .resolve(ctx, analyzer, options.max_depth);
                let source = keys_of(&source, ctx, options, analyzer, depth + 1)?;
                let filter = resolved
                    .member(&type_args[1])
                    .resolve(ctx, analyzer, options.max_depth);
                let filter = keys_of(&filter, ctx, options, analyzer, depth + 1)?;
                let keep_matches = name == "Extract";
                return Some(
                    source
                        .into_iter()
                        .filter(|key| filter.contains(key) == keep_matches)
                        .collect(),
                );
            }

            let symbol = analyzer
                .symbol_resolver()
                .resolve_from(name, &resolved.file_path, ctx.project());
            if let Some(symbol) = symbol {
                let Declaration::Enum(enumeration) = symbol.declaration else {
                    return None;
                };
                ctx.add_dependency(Dependency {
                    target: symbol.target.clone(),
                    dependency: name.clone(),
                });
                return Some(
                    enumeration
                        .members
                        .iter()
                        .map(|member| match &member.initializer {
                            Some(literal) => LiteralValue::from(literal).as_key(),
                            None => member.name.clone(),
                        })
                        .collect(),
                );
            }

            if type_args.is_empty() && looks_like_type_parameter(name) {
                let constraint = ctx
                    .current_declaration()
                    .and_then(|declaration| declaration.find_type_param(name))
                    .and_then(|param| param.constraint.as_ref())?;
                let constraint = resolved
                    .member(constraint)
                    .resolve(ctx, analyzer, options.max_depth);
                return keys_of(&constraint, ctx, options, analyzer, depth + 1);
            }

            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_gen_parser::parse_type;
    use fluent_gen_project::Project;

    fn keys(source: &str, key_type: &str) -> Option<Vec<String>> {
        let mut project = Project::new();
        project.add_source("/a.ts", source).unwrap();
        let mut ctx = ExtractorContext::new(&project, "/a.ts");
        let node = parse_type(key_type).unwrap();
        extract_keys(&node, &mut ctx, &AnalyzeOptions::default(), &TypeAnalyzer::new())
    }

    #[test]
    fn test_literal_unions() {
        assert_eq!(keys("", "\"a\" | \"b\" | \"a\""), Some(vec!["a".into(), "b".into()]));
        assert_eq!(keys("", "1 | 2"), Some(vec!["1".into(), "2".into()]));
    }

    #[test]
    fn test_keys_through_aliases() {
        let source = r#"
            type Base = "x" | "y";
            type Keys = Base | "z";
        "#;
        assert_eq!(
            keys(source, "Keys"),
            Some(vec!["x".into(), "y".into(), "z".into()])
        );
    }

    #[test]
    fn test_enum_keys_prefer_initializers() {
        let source = r#"enum Size { Small = "sm", Medium, Large = 3 }"#;
        assert_eq!(
            keys(source, "Size"),
            Some(vec!["sm".into(), "Medium".into(), "3".into()])
        );
    }

    #[test]
    fn test_keyof_and_exclude() {
        let source = "interface User { id: string; name: string; email: string }";
        assert_eq!(
            keys(source, "keyof User"),
            Some(vec!["id".into(), "name".into(), "email".into()])
        );
        assert_eq!(
            keys(source, "Exclude<keyof User, \"id\">"),
            Some(vec!["name".into(), "email".into()])
        );
        assert_eq!(
            keys(source, "Extract<keyof User, \"id\" | \"other\">"),
            Some(vec!["id".into()])
        );
    }

    #[test]
    fn test_key_filters_follow_the_registry() {
        let mut project = Project::new();
        project
            .add_source("/a.ts", "interface User { id: string; name: string }")
            .unwrap();
        let node = parse_type("Extract<keyof User, \"id\">").unwrap();
        let mut analyzer = TypeAnalyzer::new();

        let mut ctx = ExtractorContext::new(&project, "/a.ts");
        let options = AnalyzeOptions::default();
        assert_eq!(
            extract_keys(&node, &mut ctx, &options, &analyzer),
            Some(vec!["id".into()])
        );

        analyzer.utilities_mut().unregister("Extract");
        let mut ctx = ExtractorContext::new(&project, "/a.ts");
        assert_eq!(extract_keys(&node, &mut ctx, &options, &analyzer), None);
    }

    #[test]
    fn test_unenumerable_keys() {
        assert_eq!(keys("", "string"), None);
        assert_eq!(keys("", "\"a\" | string"), None);
        assert_eq!(keys("interface User {}", "User"), None);
        assert_eq!(keys("", "Unknown"), None);
    }

    #[test]
    fn test_self_referencing_alias_terminates() {
        let source = r#"
            type A = B | "a";
            type B = A | "b";
        "#;
        assert_eq!(keys(source, "A"), None);
    }
}
