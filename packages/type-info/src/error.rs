use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while analyzing a declaration
///
/// Below the reference boundary these are recovered into fallback
/// properties; at the extraction entry they surface to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Enum '{name}' has no members")]
    EmptyEnum { name: String },

    #[error("No declaration strategy handles {kind} '{name}'")]
    NoDeclarationStrategy { kind: String, name: String },
}

/// Errors surfaced by `InterfaceExtractor`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("Type '{name}' not found in {}. Available types: {available}", file_path.display())]
    TypeNotFound {
        name: String,
        file_path: PathBuf,
        available: String,
    },

    #[error("File not loaded in project: {}", file_path.display())]
    FileNotLoaded { file_path: PathBuf },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// A serialized property tree that breaks the terminal/non-terminal shape
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid property '{name}': {reason}")]
pub struct ModelError {
    pub name: String,
    pub reason: String,
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
