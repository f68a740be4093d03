//! Built-in TypeScript utility types
//!
//! Utility references (`Pick<User, "id">`, `Partial<T>`, ...) are expanded
//! by [`UtilityTypeExpander`]s looked up by name in a
//! [`UtilityTypeRegistry`]. The registry is open: callers can register
//! expanders for their own generic helpers or remove built-in ones.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut analyzer = TypeAnalyzer::new();
//! analyzer.utilities_mut().unregister("Record");
//! analyzer
//!     .utilities_mut()
//!     .register("Shallow", Box::new(ModifierExpander::partial()));
//! ```

mod keys;
mod modifiers;
mod nullable;
mod pick_omit;
mod record;
mod resolve;

pub use keys::extract_keys;
pub use modifiers::ModifierExpander;
pub use nullable::{FilterExpander, NonNullableExpander};
pub use pick_omit::{OmitExpander, PickExpander};
pub use record::RecordExpander;
pub use resolve::{resolve_type_node, ResolvedTypeNode};

use crate::analyzer::TypeAnalyzer;
use crate::context::{DiagnosticKind, ExtractorContext};
use crate::error::AnalysisResult;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::TypeNode;
use std::collections::BTreeMap;

/// One application of a utility type
#[derive(Debug, Clone, Copy)]
pub struct UtilityRequest<'a> {
    /// Name of the resulting property
    pub name: &'a str,
    pub type_args: &'a [TypeNode],
    /// Text of the whole application, e.g. `Omit<User, "id">`
    pub type_as_string: &'a str,
}

pub trait UtilityTypeExpander {
    /// Number of type arguments the utility takes
    fn arity(&self) -> usize;

    /// `Ok(None)` asks for a fallback property
    fn expand(
        &self,
        request: &UtilityRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>>;
}

pub struct UtilityTypeRegistry {
    expanders: BTreeMap<String, Box<dyn UtilityTypeExpander>>,
}

impl Default for UtilityTypeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("Pick", Box::new(PickExpander));
        registry.register("Omit", Box::new(OmitExpander));
        registry.register("Partial", Box::new(ModifierExpander::partial()));
        registry.register("Required", Box::new(ModifierExpander::required()));
        registry.register("Readonly", Box::new(ModifierExpander::readonly()));
        registry.register("Record", Box::new(RecordExpander));
        registry.register("NonNullable", Box::new(NonNullableExpander));
        registry.register("Exclude", Box::new(FilterExpander::exclude()));
        registry.register("Extract", Box::new(FilterExpander::extract()));
        registry
    }
}

impl UtilityTypeRegistry {
    /// A registry with no expanders
    pub fn empty() -> Self {
        Self {
            expanders: BTreeMap::new(),
        }
    }

    /// Register `expander` under `name`, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, expander: Box<dyn UtilityTypeExpander>) {
        self.expanders.insert(name.into(), expander);
    }

    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn UtilityTypeExpander>> {
        self.expanders.remove(name)
    }

    pub fn is_utility_type(&self, name: &str) -> bool {
        self.expanders.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn registered_types(&self) -> Vec<&str> {
        self.expanders.keys().map(String::as_str).collect()
    }

    /// Expand an application of `utility`
    ///
    /// Unknown names and applications with the wrong number of arguments
    /// produce `Ok(None)`; the latter is reported.
    pub fn expand(
        &self,
        utility: &str,
        request: &UtilityRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        let Some(expander) = self.expanders.get(utility) else {
            return Ok(None);
        };

        if request.type_args.len() != expander.arity() {
            ctx.warn(
                DiagnosticKind::UtilityArity,
                format!(
                    "{} expects {} type argument(s), got {} in '{}'",
                    utility,
                    expander.arity(),
                    request.type_args.len(),
                    request.type_as_string
                ),
            );
            return Ok(None);
        }

        expander.expand(request, ctx, options, analyzer)
    }
}

/// Analyze `node` and keep it only if it is an object
pub(crate) fn resolve_object(
    node: &TypeNode,
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
) -> Option<PropertyInfo> {
    analyzer
        .analyze("", node, ctx, &options.nested())
        .filter(PropertyInfo::is_object)
}
