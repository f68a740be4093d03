//! # Project - parsed source files with import resolution
//!
//! A `Project` owns every parsed file of an extraction run. Files are loaded
//! through a [`FileSystem`], and loading a file pulls in everything it imports
//! or re-exports, so the analysis afterwards is a pure computation over
//! in-memory declarations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fluent_gen_project::{MockFileSystem, Project};
//!
//! let fs = MockFileSystem::new()
//!     .with_file("/src/user.ts", "export interface User { id: string }");
//!
//! let mut project = Project::new();
//! let path = project.load_file_with_fs("/src/user.ts", &fs)?;
//! let user = project.find_declaration(&path, "User");
//! ```

use crate::error::ProjectError;
use crate::resolver::{is_relative, relative_candidates, ModuleResolver, ModuleTarget};
use fluent_gen_parser::ast::*;
use fluent_gen_parser::parse_with_path;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

// Re-export FileSystem traits from common
pub use fluent_gen_common::{normalize_path, FileSystem, MockFileSystem, RealFileSystem};

/// Collection of parsed source files
#[derive(Debug, Default)]
pub struct Project {
    files: HashMap<PathBuf, SourceFile>,
    resolver: ModuleResolver,
    /// (importing file, specifier) -> resolved module
    import_targets: HashMap<(PathBuf, String), ModuleTarget>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a project that resolves package imports in `module_dirs`
    pub fn with_module_dirs(module_dirs: Vec<PathBuf>) -> Self {
        Self {
            resolver: ModuleResolver::new(module_dirs),
            ..Self::default()
        }
    }

    pub fn add_module_dir(&mut self, dir: impl Into<PathBuf>) {
        self.resolver.add_module_dir(dir.into());
    }

    pub fn module_dirs(&self) -> &[PathBuf] {
        self.resolver.module_dirs()
    }

    /// Parse `source` and register it under `path` without following imports
    pub fn add_source(
        &mut self,
        path: impl Into<PathBuf>,
        source: &str,
    ) -> Result<&SourceFile, ProjectError> {
        let path = normalize_path(&path.into());
        let file = parse_with_path(source, &path.to_string_lossy()).map_err(|error| {
            ProjectError::Parse {
                path: path.clone(),
                error,
                source_text: source.to_string(),
            }
        })?;

        self.files.insert(path.clone(), file);
        self.files
            .get(&path)
            .ok_or(ProjectError::FileNotFound(path))
    }

    /// Load a file from disk together with everything it imports
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<PathBuf, ProjectError> {
        self.load_file_with_fs(path, &RealFileSystem)
    }

    /// Load a file and its transitive imports through `fs`
    ///
    /// Returns the key the entry file is stored under. Imports that resolve
    /// to nothing are left unresolved; a file that resolves but fails to
    /// parse is an error.
    pub fn load_file_with_fs(
        &mut self,
        path: impl AsRef<Path>,
        fs: &dyn FileSystem,
    ) -> Result<PathBuf, ProjectError> {
        let requested = path.as_ref();
        if !fs.exists(requested) {
            return Err(ProjectError::FileNotFound(requested.to_path_buf()));
        }

        let entry = fs
            .canonicalize(requested)
            .unwrap_or_else(|_| normalize_path(requested));

        let mut pending = vec![entry.clone()];
        let mut visited = HashSet::new();

        while let Some(current) = pending.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }

            if !self.files.contains_key(&current) {
                let source = fs
                    .read_to_string(&current)
                    .map_err(|error| ProjectError::Read {
                        path: current.clone(),
                        error,
                    })?;
                self.add_source(current.clone(), &source)?;
                debug!(path = %current.display(), "Loaded source file");
            }

            for specifier in self.module_specifiers(&current) {
                match self.resolver.resolve(&specifier, &current, fs) {
                    Some(target) => {
                        let next = target.path().to_path_buf();
                        self.import_targets
                            .insert((current.clone(), specifier), target);
                        if !visited.contains(&next) {
                            pending.push(next);
                        }
                    }
                    None => {
                        debug!(
                            from = %current.display(),
                            specifier = %specifier,
                            "Module not found"
                        );
                    }
                }
            }
        }

        Ok(entry)
    }

    fn module_specifiers(&self, path: &Path) -> Vec<String> {
        let Some(file) = self.files.get(path) else {
            return Vec::new();
        };

        let mut specifiers: Vec<String> = file
            .imports
            .iter()
            .map(|import| import.specifier.clone())
            .chain(file.re_exports.iter().map(|re| re.specifier.clone()))
            .collect();
        specifiers.dedup();
        specifiers
    }

    /// Look up a parsed file, accepting non-normalized paths
    pub fn file(&self, path: &Path) -> Option<&SourceFile> {
        self.files
            .get(path)
            .or_else(|| self.files.get(&normalize_path(path)))
    }

    /// The key a path is stored under, if the file is loaded
    pub fn file_key(&self, path: &Path) -> Option<PathBuf> {
        if self.files.contains_key(path) {
            return Some(path.to_path_buf());
        }
        let normalized = normalize_path(path);
        self.files.contains_key(&normalized).then_some(normalized)
    }

    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &SourceFile)> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Resolve a specifier imported by `from`
    ///
    /// Targets recorded while loading win; otherwise relative specifiers are
    /// matched against files already in the project.
    pub fn resolve_import(&self, from: &Path, specifier: &str) -> Option<ModuleTarget> {
        if let Some(target) = self
            .import_targets
            .get(&(from.to_path_buf(), specifier.to_string()))
        {
            return Some(target.clone());
        }

        if is_relative(specifier) {
            return relative_candidates(from, specifier)
                .into_iter()
                .find(|candidate| self.files.contains_key(candidate))
                .map(ModuleTarget::Local);
        }

        None
    }

    /// Find a top-level declaration of the file at `path`
    pub fn find_declaration(&self, path: &Path, name: &str) -> Option<&Declaration> {
        self.file(path)?.find_declaration(name)
    }

    /// Find the declaration a module exports as `name`, following re-exports
    ///
    /// `name == "default"` looks up the default export. Returns the
    /// declaration together with the file it is declared in.
    pub fn find_exported_declaration(
        &self,
        module: &Path,
        name: &str,
    ) -> Option<(&Declaration, PathBuf)> {
        let mut visited = HashSet::new();
        self.find_exported_inner(module, name, &mut visited)
    }

    fn find_exported_inner(
        &self,
        module: &Path,
        name: &str,
        visited: &mut HashSet<(PathBuf, String)>,
    ) -> Option<(&Declaration, PathBuf)> {
        let key = self.file_key(module)?;
        if !visited.insert((key.clone(), name.to_string())) {
            return None;
        }

        let file = self.files.get(&key)?;

        let local = if name == "default" {
            file.default_export()
        } else {
            file.find_declaration(name)
        };
        if let Some(declaration) = local {
            return Some((declaration, key));
        }

        // Re-exports, named lists first
        for re_export in &file.re_exports {
            let Some(names) = &re_export.names else {
                continue;
            };
            let Some(spec) = names.iter().find(|spec| spec.local == name) else {
                continue;
            };
            if let Some(target) = self.resolve_import(&key, &re_export.specifier) {
                if let Some(found) = self.find_exported_inner(target.path(), &spec.imported, visited)
                {
                    return Some(found);
                }
            }
        }

        for re_export in file.re_exports.iter().filter(|re| re.names.is_none()) {
            if name == "default" {
                break;
            }
            if let Some(target) = self.resolve_import(&key, &re_export.specifier) {
                if let Some(found) = self.find_exported_inner(target.path(), name, visited) {
                    return Some(found);
                }
            }
        }

        None
    }
}
