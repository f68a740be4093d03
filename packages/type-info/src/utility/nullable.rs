use super::{resolve_type_node, ResolvedTypeNode, UtilityRequest, UtilityTypeExpander};
use crate::analyzer::TypeAnalyzer;
use crate::context::ExtractorContext;
use crate::error::AnalysisResult;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::{Keyword, Literal, TypeKind, TypeNode};

/// `NonNullable<T>`: `T` without `null` and `undefined`
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNullableExpander;

impl UtilityTypeExpander for NonNullableExpander {
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
        let source = resolve_type_node(source, ctx, options, analyzer);

        let kept = source
            .union_members()
            .into_iter()
            .filter(|member| {
                !source
                    .member(member)
                    .resolve(ctx, analyzer, options.max_depth)
                    .node
                    .is_nullish()
            })
            .collect();

        Ok(collapse(request, &source, kept, ctx, options, analyzer))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMode {
    Exclude,
    Extract,
}

/// `Exclude<T, U>` and `Extract<T, U>` over the members of `T`
#[derive(Debug, Clone, Copy)]
pub struct FilterExpander {
    mode: FilterMode,
}

impl FilterExpander {
    pub fn exclude() -> Self {
        Self {
            mode: FilterMode::Exclude,
        }
    }

    pub fn extract() -> Self {
        Self {
            mode: FilterMode::Extract,
        }
    }
}

impl UtilityTypeExpander for FilterExpander {
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
        let [source, filter] = request.type_args else {
            return Ok(None);
        };
        let source = resolve_type_node(source, ctx, options, analyzer);
        let filter = resolve_type_node(filter, ctx, options, analyzer);

        let filters: Vec<TypeNode> = filter
            .union_members()
            .iter()
            .map(|member| {
                filter
                    .member(member)
                    .resolve(ctx, analyzer, options.max_depth)
                    .node
            })
            .collect();

        let keep_matches = self.mode == FilterMode::Extract;
        let kept = source
            .union_members()
            .into_iter()
            .filter(|member| {
                let member = source
                    .member(member)
                    .resolve(ctx, analyzer, options.max_depth)
                    .node;
                let matches = filters.iter().any(|filter| assignable(&member, filter));
                matches == keep_matches
            })
            .collect();

        Ok(collapse(request, &source, kept, ctx, options, analyzer))
    }
}

/// Analyze the members left after filtering
///
/// No members is `never` and falls back; a single member stands on its own.
fn collapse(
    request: &UtilityRequest<'_>,
    source: &ResolvedTypeNode,
    kept: Vec<TypeNode>,
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
) -> Option<PropertyInfo> {
    let nested = options.nested();
    match kept.len() {
        0 => None,
        1 => source
            .member(&kept[0])
            .analyze(request.name, ctx, &nested, analyzer),
        _ => {
            let union = TypeNode::synthetic(TypeKind::Union(kept));
            let mut info = source
                .member(&union)
                .analyze(request.name, ctx, &nested, analyzer)?;
            info.type_as_string = request.type_as_string.to_string();
            Some(info)
        }
    }
}

/// Whether `member` is assignable to `filter`, as far as syntax tells
fn assignable(member: &TypeNode, filter: &TypeNode) -> bool {
    match (&member.kind, &filter.kind) {
        (_, TypeKind::Keyword(Keyword::Any | Keyword::Unknown)) => true,
        (TypeKind::Literal(a), TypeKind::Literal(b)) => a == b,
        (TypeKind::Literal(Literal::String(_)), TypeKind::Keyword(Keyword::String))
        | (TypeKind::TemplateLiteral(_), TypeKind::Keyword(Keyword::String))
        | (TypeKind::Literal(Literal::Number(_)), TypeKind::Keyword(Keyword::Number))
        | (TypeKind::Literal(Literal::Boolean(_)), TypeKind::Keyword(Keyword::Boolean)) => true,
        (TypeKind::Keyword(a), TypeKind::Keyword(b)) => a == b,
        (TypeKind::Reference { name: a, .. }, TypeKind::Reference { name: b, .. }) => a == b,
        (TypeKind::Function { .. }, TypeKind::Reference { name, .. }) => name == "Function",
        _ => member.text == filter.text,
    }
}
