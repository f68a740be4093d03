use crate::context::{DependencyTarget, ExtractorContext};
use fluent_gen_parser::Declaration;
use fluent_gen_project::{ModuleTarget, Project};
use std::path::{Path, PathBuf};

/// A declaration found for a referenced name
#[derive(Debug, Clone)]
pub struct ResolvedSymbol<'p> {
    pub declaration: &'p Declaration,
    /// File the declaration is written in
    pub file_path: PathBuf,
    pub target: DependencyTarget,
}

impl<'p> ResolvedSymbol<'p> {
    fn local(declaration: &'p Declaration, file_path: PathBuf) -> Self {
        let target = DependencyTarget::Local {
            file_path: file_path.clone(),
            name: declaration.name().to_string(),
        };
        Self {
            declaration,
            file_path,
            target,
        }
    }
}

/// Resolves type names to declarations within the project
///
/// Lookup order: `ns.Name` through a namespace import, declarations of the
/// current file, then named and default imports. Imports that lead into a
/// package are left to the external resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolResolver;

impl SymbolResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `name` in the context's current file
    pub fn resolve<'p>(&self, name: &str, ctx: &ExtractorContext<'p>) -> Option<ResolvedSymbol<'p>> {
        self.resolve_from(name, ctx.file_path(), ctx.project())
    }

    /// Resolve `name` as seen from `file_path`
    pub fn resolve_from<'p>(
        &self,
        name: &str,
        file_path: &Path,
        project: &'p Project,
    ) -> Option<ResolvedSymbol<'p>> {
        let file = project.file(file_path)?;
        let file_key = project.file_key(file_path)?;

        if let Some((namespace, member)) = name.split_once('.') {
            let import = file.find_namespace_import(namespace)?;
            return self.resolve_import(project, &file_key, &import.specifier, member);
        }

        if let Some(declaration) = file.find_declaration(name) {
            return Some(ResolvedSymbol::local(declaration, file_key));
        }

        if let Some((import, spec)) = file.find_named_import(name) {
            return self.resolve_import(project, &file_key, &import.specifier, &spec.imported);
        }

        if let Some(import) = file.find_default_import(name) {
            return self.resolve_import(project, &file_key, &import.specifier, "default");
        }

        None
    }

    fn resolve_import<'p>(
        &self,
        project: &'p Project,
        from: &Path,
        specifier: &str,
        exported: &str,
    ) -> Option<ResolvedSymbol<'p>> {
        match project.resolve_import(from, specifier)? {
            ModuleTarget::Local(path) => {
                let (declaration, file_path) = project.find_exported_declaration(&path, exported)?;
                Some(ResolvedSymbol::local(declaration, file_path))
            }
            ModuleTarget::External { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(files: &[(&str, &str)]) -> Project {
        let mut project = Project::new();
        for (path, source) in files {
            project.add_source(*path, source).unwrap();
        }
        project
    }

    #[test]
    fn test_resolves_local_declaration() {
        let project = project(&[("/a.ts", "interface User { id: string }")]);
        let symbol = SymbolResolver
            .resolve_from("User", Path::new("/a.ts"), &project)
            .unwrap();

        assert_eq!(symbol.declaration.name(), "User");
        assert_eq!(
            symbol.target,
            DependencyTarget::Local {
                file_path: PathBuf::from("/a.ts"),
                name: "User".to_string()
            }
        );
    }

    #[test]
    fn test_resolves_aliased_and_default_imports() {
        let project = project(&[
            (
                "/main.ts",
                r#"import { User as Person } from "./user"; import Settings from "./settings";"#,
            ),
            ("/user.ts", "export interface User { id: string }"),
            ("/settings.ts", "export default interface Settings { theme: string }"),
        ]);

        let person = SymbolResolver
            .resolve_from("Person", Path::new("/main.ts"), &project)
            .unwrap();
        assert_eq!(person.declaration.name(), "User");
        assert_eq!(person.file_path, PathBuf::from("/user.ts"));

        let settings = SymbolResolver
            .resolve_from("Settings", Path::new("/main.ts"), &project)
            .unwrap();
        assert_eq!(settings.declaration.name(), "Settings");
    }

    #[test]
    fn test_resolves_namespace_member() {
        let project = project(&[
            ("/main.ts", r#"import * as models from "./models";"#),
            ("/models.ts", "export enum Role { Admin = \"admin\" }"),
        ]);

        let role = SymbolResolver
            .resolve_from("models.Role", Path::new("/main.ts"), &project)
            .unwrap();
        assert_eq!(role.declaration.name(), "Role");
        assert!(SymbolResolver
            .resolve_from("models.Missing", Path::new("/main.ts"), &project)
            .is_none());
    }

    #[test]
    fn test_unknown_name() {
        let project = project(&[("/a.ts", "interface A {}")]);
        assert!(SymbolResolver
            .resolve_from("Nope", Path::new("/a.ts"), &project)
            .is_none());
        assert!(SymbolResolver
            .resolve_from("A", Path::new("/unloaded.ts"), &project)
            .is_none());
    }
}
