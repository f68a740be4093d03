//! Type expression analysis
//!
//! [`TypeAnalyzer`] turns a type node into a [`PropertyInfo`] by handing it
//! to the first [`TypeStrategy`] that claims it. Strategies recurse through
//! the analyzer for nested types. Anything that cannot be analyzed degrades
//! to a fallback string property instead of failing the extraction.
//!
//! ## Dispatch order
//!
//! 1. Arrays (`T[]`, `Array<T>`, `readonly T[]`)
//! 2. Tuples
//! 3. Unions
//! 4. Intersections
//! 5. Keywords and literals
//! 6. Object literals and mapped types
//! 7. Named references: generics, utility types, declarations
//!
//! Function types are skipped entirely: their property is dropped.

mod array;
mod intersection;
mod object_literal;
mod primitive;
mod reference;
mod tuple;
mod union;

pub use array::ArrayStrategy;
pub use intersection::IntersectionStrategy;
pub use object_literal::ObjectLiteralStrategy;
pub use primitive::PrimitiveStrategy;
pub use reference::{looks_like_type_parameter, ReferenceStrategy};
pub use tuple::TupleStrategy;
pub use union::UnionStrategy;

use crate::context::{DiagnosticKind, ExtractorContext};
use crate::declarations::DeclarationAnalyzer;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use crate::resolver::{ExternalTypeResolver, ModuleTypeResolver, SymbolResolver};
use crate::utility::UtilityTypeRegistry;
use fluent_gen_parser::{TypeKind, TypeNode};
use tracing::debug;

/// Handles one family of type expressions
pub trait TypeStrategy {
    fn name(&self) -> &'static str;

    fn can_handle(&self, node: &TypeNode) -> bool;

    /// `None` asks the analyzer for a fallback property
    fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo>;
}

pub struct TypeAnalyzer {
    strategies: Vec<Box<dyn TypeStrategy>>,
    utilities: UtilityTypeRegistry,
    symbols: SymbolResolver,
    external: Box<dyn ExternalTypeResolver>,
    declarations: DeclarationAnalyzer,
}

impl Default for TypeAnalyzer {
    fn default() -> Self {
        Self {
            strategies: vec![
                Box::new(ArrayStrategy),
                Box::new(TupleStrategy),
                Box::new(UnionStrategy),
                Box::new(IntersectionStrategy),
                Box::new(PrimitiveStrategy),
                Box::new(ObjectLiteralStrategy),
                Box::new(ReferenceStrategy),
            ],
            utilities: UtilityTypeRegistry::default(),
            symbols: SymbolResolver,
            external: Box::new(ModuleTypeResolver),
            declarations: DeclarationAnalyzer::default(),
        }
    }
}

impl TypeAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utilities(&self) -> &UtilityTypeRegistry {
        &self.utilities
    }

    pub fn utilities_mut(&mut self) -> &mut UtilityTypeRegistry {
        &mut self.utilities
    }

    pub fn symbol_resolver(&self) -> &SymbolResolver {
        &self.symbols
    }

    pub fn external_resolver(&self) -> &dyn ExternalTypeResolver {
        self.external.as_ref()
    }

    pub fn set_external_resolver(&mut self, resolver: Box<dyn ExternalTypeResolver>) {
        self.external = resolver;
    }

    pub fn declarations(&self) -> &DeclarationAnalyzer {
        &self.declarations
    }

    pub fn declarations_mut(&mut self) -> &mut DeclarationAnalyzer {
        &mut self.declarations
    }

    /// Strategies registered later are tried first
    pub fn register_strategy(&mut self, strategy: Box<dyn TypeStrategy>) {
        self.strategies.insert(0, strategy);
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Analyze `node` as a property called `name`
    ///
    /// Returns `None` only for types that have no property representation
    /// (function types). The result carries `name` and at least the
    /// optional/array modifiers of `options`.
    pub fn analyze(
        &self,
        name: &str,
        node: &TypeNode,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
    ) -> Option<PropertyInfo> {
        if options.depth_exceeded() {
            ctx.warn(
                DiagnosticKind::DepthExceeded,
                format!(
                    "Max depth {} exceeded for property '{}' ({})",
                    options.max_depth, name, node.text
                ),
            );
            return Some(PropertyFactory::fallback(name, &node.text, options));
        }

        let node = node.unparenthesized();
        if matches!(node.kind, TypeKind::Function { .. }) {
            debug!(property = name, "Skipping function type");
            return None;
        }

        let Some(strategy) = self.strategies.iter().find(|s| s.can_handle(node)) else {
            ctx.warn(
                DiagnosticKind::UnsupportedType,
                format!("Unsupported type '{}' for property '{}'", node.text, name),
            );
            return Some(PropertyFactory::fallback(name, &node.text, options));
        };

        let mut info = strategy
            .analyze(name, node, ctx, options, self)
            .unwrap_or_else(|| PropertyFactory::fallback(name, &node.text, options));

        info.name = name.to_string();
        info.is_optional |= options.is_optional;
        info.is_array |= options.is_array;
        Some(info)
    }
}
