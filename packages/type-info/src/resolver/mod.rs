//! Name resolution for type references
//!
//! [`SymbolResolver`] finds declarations in project files, following
//! imports and re-exports. References that lead into a package go through
//! an [`ExternalTypeResolver`] instead.

pub mod external;
pub mod symbol;

pub use external::{ExternalTypeResolver, ModuleTypeResolver};
pub use symbol::{ResolvedSymbol, SymbolResolver};
