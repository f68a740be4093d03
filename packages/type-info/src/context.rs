use fluent_gen_parser::Declaration;
use fluent_gen_project::Project;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Where a referenced type lives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DependencyTarget {
    /// Declared in a project file
    #[serde(rename_all = "camelCase")]
    Local { file_path: PathBuf, name: String },
    /// Declared in a package, identified by its module specifier
    External { name: String },
}

/// A type the extracted declaration refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub target: DependencyTarget,
    /// The name the type is referenced by
    pub dependency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    CircularDependency,
    DepthExceeded,
    UnresolvedType,
    UnsupportedType,
    UtilityArity,
    UnenumerableKeys,
    AnalysisFailure,
}

/// A recoverable problem met during extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub file_path: PathBuf,
}

/// Mutable state of a single extraction
///
/// Tracks the file whose scope names resolve in, the declarations being
/// expanded (for cycle detection), the dependencies found so far and the
/// declaration whose type parameters are in scope.
#[derive(Debug)]
pub struct ExtractorContext<'p> {
    project: &'p Project,
    file_path: PathBuf,
    circular_stack: HashSet<String>,
    dependencies: Vec<Dependency>,
    current_declaration: Option<&'p Declaration>,
    diagnostics: Vec<Diagnostic>,
}

impl<'p> ExtractorContext<'p> {
    pub fn new(project: &'p Project, file_path: impl Into<PathBuf>) -> Self {
        Self {
            project,
            file_path: file_path.into(),
            circular_stack: HashSet::new(),
            dependencies: Vec::new(),
            current_declaration: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn project(&self) -> &'p Project {
        self.project
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Run `f` with names resolving in `file_path`, then restore
    pub fn in_file<R>(&mut self, file_path: PathBuf, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = std::mem::replace(&mut self.file_path, file_path);
        let result = f(self);
        self.file_path = previous;
        result
    }

    /// Run `f` inside `declaration` declared in `file_path`, then restore
    pub fn in_declaration<R>(
        &mut self,
        declaration: &'p Declaration,
        file_path: PathBuf,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let previous = self.current_declaration.replace(declaration);
        let result = self.in_file(file_path, f);
        self.current_declaration = previous;
        result
    }

    /// Mark `key` as being expanded; false if it already is
    pub fn enter_circular_check(&mut self, key: &str) -> bool {
        self.circular_stack.insert(key.to_string())
    }

    pub fn exit_circular_check(&mut self, key: &str) {
        self.circular_stack.remove(key);
    }

    pub fn is_in_circular_check(&self, key: &str) -> bool {
        self.circular_stack.contains(key)
    }

    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn current_declaration(&self) -> Option<&'p Declaration> {
        self.current_declaration
    }

    /// Log a recoverable problem and keep it for the caller
    pub fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        warn!(kind = ?kind, file = %self.file_path.display(), "{}", message);
        self.diagnostics.push(Diagnostic {
            kind,
            message,
            file_path: self.file_path.clone(),
        });
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_circular_check() {
        let project = Project::new();
        let mut ctx = ExtractorContext::new(&project, "/a.ts");

        assert!(ctx.enter_circular_check("Node"));
        assert!(!ctx.enter_circular_check("Node"));
        assert!(ctx.is_in_circular_check("Node"));
        ctx.exit_circular_check("Node");
        assert!(ctx.enter_circular_check("Node"));
    }

    #[test]
    fn test_in_file_restores_path() {
        let project = Project::new();
        let mut ctx = ExtractorContext::new(&project, "/a.ts");

        let inner = ctx.in_file(PathBuf::from("/b.ts"), |ctx| ctx.file_path().to_path_buf());
        assert_eq!(inner, PathBuf::from("/b.ts"));
        assert_eq!(ctx.file_path(), Path::new("/a.ts"));
    }

    #[test]
    fn test_warn_records_diagnostic() {
        let project = Project::new();
        let mut ctx = ExtractorContext::new(&project, "/a.ts");
        ctx.warn(DiagnosticKind::DepthExceeded, "too deep");

        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].kind, DiagnosticKind::DepthExceeded);
    }

    #[test]
    fn test_dependency_serialization() {
        let local = Dependency {
            target: DependencyTarget::Local {
                file_path: PathBuf::from("/src/user.ts"),
                name: "User".to_string(),
            },
            dependency: "User".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&local).unwrap(),
            json!({
                "target": { "kind": "local", "filePath": "/src/user.ts", "name": "User" },
                "dependency": "User"
            })
        );

        let external = Dependency {
            target: DependencyTarget::External {
                name: "@player/types".to_string(),
            },
            dependency: "Asset".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&external).unwrap()["target"]["kind"],
            "external"
        );
    }
}
