use fluent_gen_parser::parse_type;
use fluent_gen_project::Project;
use fluent_gen_type_info::*;
use std::collections::HashSet;

fn project(source: &str) -> Project {
    let mut project = Project::new();
    project.add_source("/types.ts", source).unwrap();
    project
}

fn analyze_with(project: &Project, text: &str, options: &AnalyzeOptions) -> PropertyInfo {
    let mut ctx = ExtractorContext::new(project, "/types.ts");
    let node = parse_type(text).unwrap();
    TypeAnalyzer::new()
        .analyze("value", &node, &mut ctx, options)
        .unwrap()
}

fn analyze(project: &Project, text: &str) -> PropertyInfo {
    analyze_with(project, text, &AnalyzeOptions::default())
}

fn depth(info: &PropertyInfo) -> usize {
    1 + info.children().iter().map(depth).max().unwrap_or(0)
}

fn name_set(info: &PropertyInfo) -> HashSet<String> {
    info.children().iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_idempotence() {
    let project = project(
        r#"
        interface Address { street: string; zip?: number }
        interface User {
            name: string;
            address: Address;
            tags: Array<"a" | "b">;
            meta: Partial<Record<"x" | "y", Address>>;
        }
        "#,
    );

    assert_eq!(analyze(&project, "User"), analyze(&project, "User"));
}

#[test]
fn test_depth_safety() {
    let project = project(
        r#"
        type A = { next: B; label: string };
        type B = { next: A };
        type Chain = { inner: Chain[] };
        "#,
    );

    for max_depth in [1, 3, 10] {
        let options = AnalyzeOptions::default().with_max_depth(max_depth);
        for text in ["A", "Chain"] {
            let info = analyze_with(&project, text, &options);
            assert!(depth(&info) <= max_depth + 1, "{} at {}", text, max_depth);
        }
    }
}

#[test]
fn test_generic_substitution() {
    let project = project("type Foo<T> = T[];");

    let through_alias = analyze(&project, "Foo<string>");
    let direct = analyze(&project, "string[]");

    assert_eq!(through_alias.type_as_string, "Foo");
    assert_eq!(
        through_alias,
        PropertyInfo {
            type_as_string: "Foo".to_string(),
            ..direct
        }
    );
}

#[test]
fn test_pick_omit_complementarity() {
    let project = project(
        "interface Shape { a: string; b: number; c?: boolean; d: string[]; e: { x: number } }",
    );

    for keys in [r#""a""#, r#""a" | "c""#, r#""b" | "d" | "e""#] {
        let picked = name_set(&analyze(&project, &format!("Pick<Shape, {}>", keys)));
        let omitted = name_set(&analyze(&project, &format!("Omit<Shape, {}>", keys)));

        assert!(picked.is_disjoint(&omitted), "{}", keys);
        let all: HashSet<String> = picked.union(&omitted).cloned().collect();
        assert_eq!(all, name_set(&analyze(&project, "Shape")), "{}", keys);
    }
}

#[test]
fn test_open_record() {
    let project = project("interface Holder { data: Record<string, unknown> }");

    for text in [
        "Record<string, unknown>",
        "Partial<{ nested: Record<string, unknown> }>",
        "Holder",
    ] {
        let info = analyze(&project, text);
        let record = if info.children().is_empty() {
            &info
        } else {
            &info.children()[0]
        };
        assert!(record.is_object(), "{}", text);
        assert!(record.children().is_empty(), "{}", text);
        assert!(record.accepts_unknown_properties, "{}", text);
    }
}

#[test]
fn test_alias_naming() {
    let project = project(r#"type Status = "active" | "inactive";"#);
    let info = analyze(&project, "Status");

    assert_eq!(info.type_as_string, "Status");
    assert!(info.is_object());
    assert_eq!(info.children().len(), 2);
}

#[test]
fn test_array_flattening() {
    let project = project("");
    let shorthand = analyze(&project, "string[]");

    assert_eq!(shorthand, analyze(&project, "Array<string>"));
    assert!(shorthand.is_array);
    assert_eq!(shorthand.property_type(), PropertyType::String);
}
