use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fluent_gen_parser::parse;

fn parse_simple_interface(c: &mut Criterion) {
    let source = r#"
        /** A user of the system */
        export interface User {
            id: string;
            name?: string;
            age: number;
            tags: string[];
        }
    "#;

    c.bench_function("parse_simple_interface", |b| {
        b.iter(|| parse(black_box(source)))
    });
}

fn parse_medium_module(c: &mut Criterion) {
    let source = r#"
        import type { Asset, Binding } from "./core";

        export enum Size { Small = "sm", Medium = "md", Large = "lg" }

        export type Status = "active" | "inactive" | "pending";

        export interface ButtonProps<T = string> extends Asset {
            /** Text shown on the button */
            label: T;
            size?: Size;
            status: Status;
            onClick?: (event: MouseEvent) => void;
            metadata: Record<string, unknown>;
            position: [x: number, y: number];
            [key: string]: unknown;
        }

        export type ButtonOverrides = Partial<Omit<ButtonProps, "label">>;
        export type Flags = { readonly [K in Size]?: boolean };
    "#;

    c.bench_function("parse_medium_module", |b| {
        b.iter(|| parse(black_box(source)))
    });
}

fn parse_large_file(c: &mut Criterion) {
    // Simulate a larger file with many declarations
    let mut source = String::new();

    for i in 0..10 {
        source.push_str(&format!("export type Key{} = \"a{}\" | \"b{}\";\n", i, i, i));
    }

    for i in 0..50 {
        source.push_str(&format!(
            r#"
            /** Declaration {} */
            export interface Node{}<T> {{
                id: string;
                value: T;
                children?: Node{}<T>[];
                key: Key{};
                meta: {{ created: number; tags: string[] }};
            }}
            "#,
            i,
            i,
            i,
            i % 10
        ));
    }

    c.bench_function("parse_large_file", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

fn tokenize_only(c: &mut Criterion) {
    use fluent_gen_parser::tokenize;

    let source = r#"
        export interface User {
            id: string;
            name?: string;
            roles: Array<"admin" | "user">;
        }
    "#;

    c.bench_function("tokenize_only", |b| {
        b.iter(|| tokenize(black_box(source)))
    });
}

criterion_group!(
    benches,
    parse_simple_interface,
    parse_medium_module,
    parse_large_file,
    tokenize_only
);
criterion_main!(benches);
