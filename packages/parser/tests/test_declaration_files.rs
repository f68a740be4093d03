use fluent_gen_parser::{parse, parse_with_path, Declaration, DeclarationKind, TypeKind, TypeMember};

#[test]
fn test_declaration_file_with_ambient_module() {
    let source = r#"
        declare module "virtual" {
            export const value: number;
        }

        export declare interface Options {
            verbose?: boolean;
        }

        declare const enum Mode { Fast, Slow }

        export declare function run(options: Options): void;
    "#;

    let result = parse_with_path(source, "types.d.ts");
    if let Err(e) = &result {
        eprintln!("Parse error: {:?}", e);
    }
    let file = result.unwrap();

    assert_eq!(file.path, "types.d.ts");
    assert_eq!(file.declaration_names(), vec!["Options", "Mode"]);
    assert_eq!(
        file.find_declaration("Mode").map(|d| d.kind()),
        Some(DeclarationKind::Enum)
    );
}

#[test]
fn test_utility_applications_keep_source_text() {
    let source = r#"
        type Base = { a: string; b: number };
        type Picked = Pick<Base, "a" | "b">;
        type Nested = Partial<Omit<Base,
            "a">>;
    "#;

    let file = parse(source).unwrap();

    match file.find_declaration("Picked") {
        Some(Declaration::TypeAlias(alias)) => {
            assert_eq!(alias.ty.text, "Pick<Base, \"a\" | \"b\">");
            match &alias.ty.kind {
                TypeKind::Reference { name, type_args } => {
                    assert_eq!(name, "Pick");
                    assert_eq!(type_args.len(), 2);
                    assert!(matches!(type_args[1].kind, TypeKind::Union(_)));
                }
                other => panic!("expected reference, got {:?}", other),
            }
        }
        other => panic!("expected alias, got {:?}", other),
    }

    match file.find_declaration("Nested") {
        Some(Declaration::TypeAlias(alias)) => {
            assert!(alias.ty.text.starts_with("Partial<Omit<Base,"));
            assert!(alias.ty.text.ends_with("\"a\">>"));
        }
        other => panic!("expected alias, got {:?}", other),
    }
}

#[test]
fn test_object_literal_members_and_docs() {
    let source = r#"
        export type Settings = {
            /** Theme name */
            theme: "light" | "dark";
            nested: {
                deep?: number;
            };
        };
    "#;

    let file = parse(source).unwrap();
    let Some(Declaration::TypeAlias(alias)) = file.find_declaration("Settings") else {
        panic!("missing alias");
    };
    let TypeKind::TypeLiteral(members) = &alias.ty.kind else {
        panic!("expected object literal");
    };

    assert_eq!(members.len(), 2);
    match &members[0] {
        TypeMember::Property(prop) => {
            assert_eq!(prop.documentation.as_deref(), Some("Theme name"));
        }
        other => panic!("expected property, got {:?}", other),
    }
}

#[test]
fn test_ast_serializes_to_json() {
    let file = parse("export enum E { A = 1 }").unwrap();
    let json = serde_json::to_value(&file).unwrap();

    assert_eq!(json["declarations"][0]["kind"], "Enum");
    assert_eq!(json["declarations"][0]["name"], "E");
    assert_eq!(json["declarations"][0]["members"][0]["initializer"], 1.0);
}
