use fluent_gen_project::Project;
use fluent_gen_type_info::*;

fn extract(project: &Project, file: &str, type_name: &str) -> (ExtractedType, Vec<Diagnostic>) {
    let mut extractor = InterfaceExtractor::new(project, file);
    let extracted = extractor.extract(type_name).unwrap();
    (extracted, extractor.diagnostics().to_vec())
}

fn single_file(source: &str) -> Project {
    let mut project = Project::new();
    project.add_source("/types.ts", source).unwrap();
    project
}

#[test]
fn test_type_arguments_bind_parameters() {
    let project = single_file(
        r#"
        interface Box<T> { value: T }
        interface Holder { box: Box<string> }
        "#,
    );
    let (holder, _) = extract(&project, "/types.ts", "Holder");

    let value = holder.properties[0].property("value").unwrap();
    assert_eq!(value.property_type(), PropertyType::String);
    assert_eq!(holder.properties[0].type_as_string, "Box<string>");
}

#[test]
fn test_defaults_see_earlier_parameters() {
    let project = single_file("interface Paged<T = string, U = T[]> { item: T; items: U }");
    let (paged, warnings) = extract(&project, "/types.ts", "Paged");

    let item = &paged.properties[0];
    let items = &paged.properties[1];
    assert_eq!(item.property_type(), PropertyType::String);
    assert!(!item.is_array);
    assert_eq!(items.property_type(), PropertyType::String);
    assert!(items.is_array);
    assert!(warnings.is_empty());
}

#[test]
fn test_same_parameter_name_at_every_level() {
    let project = single_file(
        r#"
        interface Inner<T> { value: T }
        interface Outer<T> { inner: Inner<T[]> }
        interface Use { outer: Outer<number> }
        "#,
    );
    let (usage, _) = extract(&project, "/types.ts", "Use");

    let value = usage.properties[0]
        .property("inner")
        .and_then(|inner| inner.property("value"))
        .unwrap();
    assert_eq!(value.property_type(), PropertyType::Number);
    assert!(value.is_array);
}

#[test]
fn test_sibling_instantiations_do_not_leak() {
    let project = single_file(
        r#"
        interface Box<T> { value: T }
        interface Pair { a: Box<string>; b: Box<number> }
        "#,
    );
    let (pair, warnings) = extract(&project, "/types.ts", "Pair");

    let a = pair.properties[0].property("value").unwrap();
    let b = pair.properties[1].property("value").unwrap();
    assert_eq!(a.property_type(), PropertyType::String);
    assert_eq!(b.property_type(), PropertyType::Number);
    assert!(warnings.is_empty());
}

#[test]
fn test_constraint_fallback() {
    let project = single_file("interface Container<T extends { id: string }> { item: T }");
    let (container, _) = extract(&project, "/types.ts", "Container");

    let item = &container.properties[0];
    assert!(item.is_object());
    assert_eq!(item.children()[0].name, "id");
}

#[test]
fn test_unbound_parameter_falls_back() {
    let project = single_file("interface Box<T> { value: T }");
    let (boxed, warnings) = extract(&project, "/types.ts", "Box");

    let value = &boxed.properties[0];
    assert_eq!(value.property_type(), PropertyType::String);
    assert!(value.documentation.is_some());
    assert_eq!(warnings[0].kind, DiagnosticKind::UnresolvedType);
}

#[test]
fn test_arguments_resolve_at_use_site() {
    let mut project = Project::new();
    project
        .add_source(
            "/src/main.ts",
            r#"
            import { Box } from "./box";
            interface User { id: string }
            export interface Holder { box: Box<User> }
            "#,
        )
        .unwrap();
    project
        .add_source("/src/box.ts", "export interface Box<T> { value: T }")
        .unwrap();

    let (holder, warnings) = extract(&project, "/src/main.ts", "Holder");

    let value = holder.properties[0].property("value").unwrap();
    assert!(value.is_object());
    assert_eq!(value.type_as_string, "User");
    assert!(warnings.is_empty());

    let deps: Vec<&str> = holder
        .dependencies
        .iter()
        .map(|d| d.dependency.as_str())
        .collect();
    assert_eq!(deps, vec!["Box", "User"]);
}

#[test]
fn test_generic_alias_over_utility() {
    let project = single_file(
        r#"
        interface User { id: string; name: string; email: string }
        type Only<T, K extends keyof T> = Pick<T, K>;
        type Contact = Only<User, "name" | "email">;
        "#,
    );
    let (contact, _) = extract(&project, "/types.ts", "Contact");

    let names: Vec<&str> = contact.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["name", "email"]);
    assert_eq!(contact.type_as_string, "Contact");
}

#[test]
fn test_generic_context_snapshot() {
    let project = single_file("");
    let ctx = ExtractorContext::new(&project, "/types.ts");
    let options = AnalyzeOptions::default();
    let node = fluent_gen_parser::parse_type("number").unwrap();

    let scope = options.generic_context.with_binding(
        "T",
        GenericBinding {
            node,
            file_path: ctx.file_path().to_path_buf(),
            scope: GenericContext::new(),
        },
    );
    assert_eq!(scope.snapshot().get("T").map(String::as_str), Some("number"));
    assert!(options.generic_context.is_empty());
}
