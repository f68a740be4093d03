//! Text rendering for synthesized type nodes
//!
//! Parsed nodes keep their source text. Nodes built in code (generic
//! substitution, utility expansion) need text too; child nodes already carry
//! theirs, so rendering one level is enough.

use crate::ast::*;

/// Render a type kind using the text of its children
pub fn render_kind(kind: &TypeKind) -> String {
    match kind {
        TypeKind::Keyword(keyword) => keyword.as_str().to_string(),
        TypeKind::Literal(literal) => literal.to_string(),
        TypeKind::TemplateLiteral(raw) => raw.clone(),
        TypeKind::Reference { name, type_args } => {
            if type_args.is_empty() {
                name.clone()
            } else {
                format!("{}<{}>", name, join(type_args, ", "))
            }
        }
        TypeKind::Array(element) => {
            if needs_parens_in_array(element) {
                format!("({})[]", element.text)
            } else {
                format!("{}[]", element.text)
            }
        }
        TypeKind::Tuple(elements) => {
            let rendered: Vec<String> = elements.iter().map(render_tuple_element).collect();
            format!("[{}]", rendered.join(", "))
        }
        TypeKind::Union(members) => join(members, " | "),
        TypeKind::Intersection(members) => join(members, " & "),
        TypeKind::TypeLiteral(members) => render_members(members),
        TypeKind::Mapped(mapped) => render_mapped(mapped),
        TypeKind::Parenthesized(inner) => format!("({})", inner.text),
        TypeKind::Function {
            params,
            return_type,
            is_construct,
        } => {
            let prefix = if *is_construct { "new " } else { "" };
            format!(
                "{}({}) => {}",
                prefix,
                render_params(params),
                return_type.text
            )
        }
        TypeKind::Operator { operator, ty } => format!("{} {}", operator.as_str(), ty.text),
        TypeKind::IndexedAccess { object, index } => format!("{}[{}]", object.text, index.text),
        TypeKind::Conditional {
            check,
            extends,
            true_type,
            false_type,
        } => format!(
            "{} extends {} ? {} : {}",
            check.text, extends.text, true_type.text, false_type.text
        ),
        TypeKind::Query(entity) => format!("typeof {}", entity),
        TypeKind::Infer(name) => format!("infer {}", name),
    }
}

fn join(nodes: &[TypeNode], separator: &str) -> String {
    nodes
        .iter()
        .map(|node| node.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

fn needs_parens_in_array(element: &TypeNode) -> bool {
    matches!(
        element.kind,
        TypeKind::Union(_)
            | TypeKind::Intersection(_)
            | TypeKind::Function { .. }
            | TypeKind::Conditional { .. }
            | TypeKind::Operator { .. }
    )
}

fn render_tuple_element(element: &TupleElement) -> String {
    let rest = if element.rest { "..." } else { "" };
    match &element.label {
        Some(label) => {
            let optional = if element.optional { "?" } else { "" };
            format!("{}{}{}: {}", rest, label, optional, element.ty.text)
        }
        None => {
            let optional = if element.optional { "?" } else { "" };
            format!("{}{}{}", rest, element.ty.text, optional)
        }
    }
}

fn render_params(params: &[Parameter]) -> String {
    params
        .iter()
        .map(|param| {
            let rest = if param.rest { "..." } else { "" };
            let optional = if param.optional { "?" } else { "" };
            match &param.ty {
                Some(ty) => format!("{}{}{}: {}", rest, param.name, optional, ty.text),
                None => format!("{}{}{}", rest, param.name, optional),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_members(members: &[TypeMember]) -> String {
    if members.is_empty() {
        return "{}".to_string();
    }

    let rendered: Vec<String> = members
        .iter()
        .map(|member| match member {
            TypeMember::Property(prop) => {
                let readonly = if prop.readonly { "readonly " } else { "" };
                let optional = if prop.optional { "?" } else { "" };
                match &prop.ty {
                    Some(ty) => format!("{}{}{}: {}", readonly, prop.name, optional, ty.text),
                    None => format!("{}{}{}", readonly, prop.name, optional),
                }
            }
            TypeMember::Method(method) => {
                let optional = if method.optional { "?" } else { "" };
                let ret = method
                    .return_type
                    .as_ref()
                    .map(|ty| format!(": {}", ty.text))
                    .unwrap_or_default();
                format!(
                    "{}{}({}){}",
                    method.name,
                    optional,
                    render_params(&method.params),
                    ret
                )
            }
            TypeMember::Index(index) => format!(
                "[{}: {}]: {}",
                index.key_name, index.key_type.text, index.value_type.text
            ),
            TypeMember::Call(call) => {
                let prefix = if call.is_construct { "new " } else { "" };
                let ret = call
                    .return_type
                    .as_ref()
                    .map(|ty| format!(": {}", ty.text))
                    .unwrap_or_default();
                format!("{}({}){}", prefix, render_params(&call.params), ret)
            }
        })
        .collect();

    format!("{{ {} }}", rendered.join("; "))
}

fn render_mapped(mapped: &MappedType) -> String {
    let readonly = if mapped.readonly { "readonly " } else { "" };
    let name_type = mapped
        .name_type
        .as_ref()
        .map(|ty| format!(" as {}", ty.text))
        .unwrap_or_default();
    let optional = match mapped.optional {
        Some(true) => "?",
        Some(false) => "-?",
        None => "",
    };
    let value = mapped
        .ty
        .as_ref()
        .map(|ty| ty.text.as_str())
        .unwrap_or("any");

    format!(
        "{{ {}[{} in {}{}]{}: {} }}",
        readonly, mapped.param, mapped.constraint.text, name_type, optional, value
    )
}
