use std::path::PathBuf;
use thiserror::Error;

/// File access error shared by the fluent-gen crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
}
