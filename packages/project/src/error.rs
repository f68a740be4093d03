use fluent_gen_common::CommonError;
use fluent_gen_parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Failed to read {}: {error}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        error: CommonError,
    },

    #[error("Failed to parse {}: {error}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        error: ParseError,
        /// Text of the file, kept for error rendering
        source_text: String,
    },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

impl ProjectError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ProjectError::Read { path, .. } => path,
            ProjectError::Parse { path, .. } => path,
            ProjectError::FileNotFound(path) => path,
        }
    }
}
