pub mod error;
pub mod project;
pub mod resolver;

pub use error::*;
pub use project::*;
pub use resolver::*;
