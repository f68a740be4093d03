use crate::error::CommonError;
use crate::result::CommonResult;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// File system abstraction for module loading and testing
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Canonicalize a path (resolve symlinks, make absolute)
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, std::io::Error>;

    /// Read a whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> CommonResult<String>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, std::io::Error> {
        std::fs::canonicalize(path)
    }

    fn read_to_string(&self, path: &Path) -> CommonResult<String> {
        if !path.exists() {
            return Err(CommonError::NotFound(path.to_path_buf()));
        }
        Ok(std::fs::read_to_string(path)?)
    }
}

/// In-memory file system for testing
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .insert(normalize_path(&path.into()), contents.into());
    }

    /// Builder-style variant of [`MockFileSystem::add_file`]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.add_file(path, contents);
        self
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize_path(path))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, std::io::Error> {
        // No symlinks in memory; lexical normalization is enough
        Ok(normalize_path(path))
    }

    fn read_to_string(&self, path: &Path) -> CommonResult<String> {
        self.files
            .get(&normalize_path(path))
            .cloned()
            .ok_or_else(|| CommonError::NotFound(path.to_path_buf()))
    }
}

/// Resolve `.` and `..` components without touching the disk
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/src/models/../user.ts")),
            PathBuf::from("/src/user.ts")
        );
        assert_eq!(
            normalize_path(Path::new("./a/./b.ts")),
            PathBuf::from("a/b.ts")
        );
    }

    #[test]
    fn test_mock_file_system_reads_normalized_paths() {
        let fs = MockFileSystem::new().with_file("/src/user.ts", "export interface User {}");

        assert!(fs.exists(Path::new("/src/models/../user.ts")));
        assert_eq!(
            fs.read_to_string(Path::new("/src/user.ts")).unwrap(),
            "export interface User {}"
        );
        assert!(matches!(
            fs.read_to_string(Path::new("/src/missing.ts")),
            Err(CommonError::NotFound(_))
        ));
    }
}
