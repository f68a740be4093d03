use super::{TypeAnalyzer, TypeStrategy};
use crate::context::ExtractorContext;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::{LiteralValue, PropertyInfo, TerminalType};
use fluent_gen_parser::{Keyword, Literal, TypeKind, TypeNode};

/// Keywords, literal types and template literals
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveStrategy;

impl TypeStrategy for PrimitiveStrategy {
    fn name(&self) -> &'static str {
        "primitive"
    }

    fn can_handle(&self, node: &TypeNode) -> bool {
        matches!(
            node.kind,
            TypeKind::Keyword(_) | TypeKind::Literal(_) | TypeKind::TemplateLiteral(_)
        )
    }

    fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        _ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        _analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo> {
        let info = match &node.kind {
            TypeKind::Keyword(Keyword::Object) => {
                PropertyFactory::open_object(name, &node.text, options)
            }
            TypeKind::Keyword(Keyword::Null) => PropertyFactory::literal(
                name,
                TerminalType::Unknown,
                LiteralValue::Null,
                &node.text,
                options,
            ),
            TypeKind::Keyword(keyword) => {
                PropertyFactory::terminal(name, keyword_type(*keyword), &node.text, options)
            }
            TypeKind::Literal(literal) => PropertyFactory::literal(
                name,
                literal_type(literal),
                LiteralValue::from(literal),
                &node.text,
                options,
            ),
            TypeKind::TemplateLiteral(_) => {
                PropertyFactory::terminal(name, TerminalType::String, &node.text, options)
            }
            _ => return None,
        };
        Some(info)
    }
}

fn keyword_type(keyword: Keyword) -> TerminalType {
    match keyword {
        Keyword::String => TerminalType::String,
        Keyword::Number | Keyword::BigInt => TerminalType::Number,
        Keyword::Boolean => TerminalType::Boolean,
        _ => TerminalType::Unknown,
    }
}

fn literal_type(literal: &Literal) -> TerminalType {
    match literal {
        Literal::String(_) => TerminalType::String,
        Literal::Number(_) => TerminalType::Number,
        Literal::Boolean(_) => TerminalType::Boolean,
    }
}
