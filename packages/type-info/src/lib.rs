//! # fluent-gen type info
//!
//! Extracts the shape of TypeScript interfaces, type aliases and enums into
//! a tree of [`PropertyInfo`] nodes that builder generators consume.
//!
//! ## Features
//!
//! - **Strategy dispatch**: arrays, tuples, unions, intersections, primitives,
//!   object literals and references each have their own analyzer
//! - **Generics**: type arguments bind lexically, with defaults and
//!   constraint fallbacks
//! - **Utility types**: `Pick`, `Omit`, `Partial`, `Required`, `Readonly`,
//!   `Record`, `NonNullable`, `Exclude` and `Extract`, through an open registry
//! - **Cross-file resolution**: imports, re-exports and package declaration
//!   files, with every referenced type recorded as a dependency
//! - **Graceful degradation**: cycles, depth limits and unresolvable types
//!   become fallback properties plus a warning, never a failed extraction
//!
//! ## Example
//!
//! ```rust
//! use fluent_gen_project::Project;
//! use fluent_gen_type_info::{InterfaceExtractor, PropertyType};
//!
//! let mut project = Project::new();
//! project
//!     .add_source(
//!         "/src/user.ts",
//!         r#"
//!         export interface User {
//!             /** Display name */
//!             name: string;
//!             tags?: string[];
//!         }
//!         "#,
//!     )
//!     .unwrap();
//!
//! let mut extractor = InterfaceExtractor::new(&project, "/src/user.ts");
//! let user = extractor.extract("User").unwrap();
//!
//! assert_eq!(user.properties[0].name, "name");
//! assert_eq!(user.properties[0].property_type(), PropertyType::String);
//! assert!(user.properties[1].is_array);
//! ```

pub mod analyzer;
pub mod context;
pub mod declarations;
pub mod error;
pub mod extractor;
pub mod factory;
pub mod generic_context;
pub mod options;
pub mod property;
pub mod resolver;
pub mod utility;

// Re-export main types for convenience
pub use analyzer::{TypeAnalyzer, TypeStrategy};
pub use context::{
    Dependency, DependencyTarget, Diagnostic, DiagnosticKind, ExtractorContext,
};
pub use declarations::{DeclarationAnalyzer, DeclarationRequest, DeclarationStrategy};
pub use error::{AnalysisError, AnalysisResult, ExtractError, ModelError};
pub use extractor::{ExtractedType, InterfaceExtractor};
pub use factory::PropertyFactory;
pub use generic_context::{GenericBinding, GenericContext};
pub use options::{AnalyzeOptions, ExtractorOptions};
pub use property::{
    LiteralValue, NonTerminalType, PropertyInfo, PropertyKind, PropertyNode, PropertyType,
    TerminalType,
};
pub use resolver::{ExternalTypeResolver, ModuleTypeResolver, ResolvedSymbol, SymbolResolver};
pub use utility::{UtilityRequest, UtilityTypeExpander, UtilityTypeRegistry};
