pub mod extract;
pub mod list;

pub use extract::{extract, ExtractArgs};
pub use list::{list, ListArgs};

use anyhow::{anyhow, Result};
use fluent_gen_parser::format_parse_error;
use fluent_gen_project::{Project, ProjectError};
use std::path::{Path, PathBuf};

/// Load `path` and its imports, rendering parse errors with source context
pub(crate) fn load_project(path: &Path, module_dirs: Vec<PathBuf>) -> Result<(Project, PathBuf)> {
    let mut project = Project::with_module_dirs(module_dirs);
    let entry = project.load_file(path).map_err(|err| match err {
        ProjectError::Parse {
            path,
            error,
            source_text,
        } => {
            let file_name = path.display().to_string();
            anyhow!("\n{}", format_parse_error(&source_text, &file_name, &error))
        }
        other => anyhow!(other),
    })?;
    Ok((project, entry))
}
