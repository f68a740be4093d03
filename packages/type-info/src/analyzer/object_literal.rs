use super::{TypeAnalyzer, TypeStrategy};
use crate::context::{DiagnosticKind, ExtractorContext};
use crate::declarations::analyze_members;
use crate::factory::PropertyFactory;
use crate::generic_context::GenericBinding;
use crate::options::AnalyzeOptions;
use crate::property::{PropertyInfo, TerminalType};
use crate::utility::extract_keys;
use fluent_gen_parser::{Keyword, Literal, MappedType, TypeKind, TypeNode, TypeOperator};

/// Inline object types and mapped types over enumerable keys
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectLiteralStrategy;

impl TypeStrategy for ObjectLiteralStrategy {
    fn name(&self) -> &'static str {
        "object-literal"
    }

    fn can_handle(&self, node: &TypeNode) -> bool {
        matches!(node.kind, TypeKind::TypeLiteral(_) | TypeKind::Mapped(_))
    }

    fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo> {
        match &node.kind {
            TypeKind::TypeLiteral(members) => {
                let analysis = analyze_members(members, ctx, &options.nested(), analyzer);
                let mut object =
                    PropertyFactory::object(name, analysis.properties, &node.text, options);
                object.accepts_unknown_properties = analysis.accepts_unknown_properties;
                Some(object)
            }
            TypeKind::Mapped(mapped) => analyze_mapped(name, node, mapped, ctx, options, analyzer),
            _ => None,
        }
    }
}

fn analyze_mapped(
    name: &str,
    node: &TypeNode,
    mapped: &MappedType,
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
) -> Option<PropertyInfo> {
    let Some(keys) = extract_keys(&mapped.constraint, ctx, options, analyzer) else {
        if mapped.constraint.is_keyword(Keyword::String) {
            return Some(PropertyFactory::open_object(name, &node.text, options));
        }
        ctx.warn(
            DiagnosticKind::UnenumerableKeys,
            format!("Cannot enumerate keys of mapped type '{}'", node.text),
        );
        return None;
    };

    // `{ [K in keyof T]: ... }` keeps T's modifiers and can read T[K]
    let source_type = match &mapped.constraint.unparenthesized().kind {
        TypeKind::Operator {
            operator: TypeOperator::KeyOf,
            ty,
        } => Some(ty.as_ref()),
        _ => None,
    };
    let source = source_type
        .and_then(|ty| analyzer.analyze("", ty, ctx, &options.nested()))
        .filter(PropertyInfo::is_object);

    let mut properties = Vec::new();
    for key in keys {
        let source_property = source.as_ref().and_then(|s| s.property(&key));
        let is_optional = mapped
            .optional
            .unwrap_or_else(|| source_property.map_or(false, |p| p.is_optional));

        let binding = GenericBinding {
            node: TypeNode::literal(Literal::String(key.clone())),
            file_path: ctx.file_path().to_path_buf(),
            scope: options.generic_context.clone(),
        };
        let key_options = options
            .nested()
            .with_generic_context(options.generic_context.with_binding(&mapped.param, binding))
            .with_optional(is_optional);

        let property = match (&mapped.ty, source_property) {
            (Some(ty), Some(source_property))
                if reads_source_property(ty, &mapped.param, source_type) =>
            {
                let mut property = source_property.clone();
                property.is_optional = is_optional;
                Some(property)
            }
            (Some(ty), _) => analyzer.analyze(&key, ty, ctx, &key_options),
            (None, _) => Some(PropertyFactory::terminal(
                &key,
                TerminalType::Unknown,
                "any",
                &key_options,
            )),
        };
        properties.extend(property);
    }

    Some(PropertyFactory::object(name, properties, &node.text, options))
}

/// `T[K]` where `T` is the `keyof` operand and `K` the mapped parameter
fn reads_source_property(ty: &TypeNode, param: &str, source_type: Option<&TypeNode>) -> bool {
    let (TypeKind::IndexedAccess { object, index }, Some(source_type)) =
        (&ty.unparenthesized().kind, source_type)
    else {
        return false;
    };
    index.reference_name() == Some(param) && object.text == source_type.text
}
