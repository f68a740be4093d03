use crate::analyzer::TypeAnalyzer;
use crate::context::{Dependency, ExtractorContext};
use crate::generic_context::GenericContext;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::{Declaration, TypeKind, TypeNode};
use std::path::PathBuf;

/// A type node together with the file and bindings it is read in
#[derive(Debug, Clone)]
pub struct ResolvedTypeNode {
    pub node: TypeNode,
    pub file_path: PathBuf,
    pub generic_context: GenericContext,
}

impl ResolvedTypeNode {
    /// `node` as written at the current point of analysis
    pub fn at(node: &TypeNode, ctx: &ExtractorContext<'_>, options: &AnalyzeOptions) -> Self {
        Self {
            node: node.unparenthesized().clone(),
            file_path: ctx.file_path().to_path_buf(),
            generic_context: options.generic_context.clone(),
        }
    }

    /// Another node written in the same place, such as a union member
    pub fn member(&self, node: &TypeNode) -> Self {
        Self {
            node: node.unparenthesized().clone(),
            file_path: self.file_path.clone(),
            generic_context: self.generic_context.clone(),
        }
    }

    /// Follow type parameter bindings and type aliases to the aliased node
    ///
    /// Stops at anything else: interfaces, enums, utility applications and
    /// names that do not resolve. Followed aliases are recorded as
    /// dependencies.
    pub fn resolve(
        mut self,
        ctx: &mut ExtractorContext<'_>,
        analyzer: &TypeAnalyzer,
        max_depth: usize,
    ) -> Self {
        for _ in 0..max_depth {
            let TypeKind::Reference { name, type_args } = &self.node.kind else {
                break;
            };

            if type_args.is_empty() {
                if let Some(binding) = self.generic_context.lookup(name) {
                    self = Self {
                        node: binding.node.unparenthesized().clone(),
                        file_path: binding.file_path.clone(),
                        generic_context: binding.scope.clone(),
                    };
                    continue;
                }
            }

            if analyzer.utilities().is_utility_type(name) {
                break;
            }

            let Some(symbol) =
                analyzer
                    .symbol_resolver()
                    .resolve_from(name, &self.file_path, ctx.project())
            else {
                break;
            };
            let Declaration::TypeAlias(alias) = symbol.declaration else {
                break;
            };

            ctx.add_dependency(Dependency {
                target: symbol.target.clone(),
                dependency: name.clone(),
            });
            let scope = GenericContext::for_declaration(
                &alias.type_params,
                type_args,
                &self.file_path,
                &self.generic_context,
                &symbol.file_path,
            );
            self = Self {
                node: alias.ty.unparenthesized().clone(),
                file_path: symbol.file_path,
                generic_context: scope,
            };
        }
        self
    }

    /// Members of a union, or the node itself
    pub fn union_members(&self) -> Vec<TypeNode> {
        match &self.node.kind {
            TypeKind::Union(members) => members.clone(),
            _ => vec![self.node.clone()],
        }
    }

    /// Analyze the node where it was written
    pub fn analyze(
        &self,
        name: &str,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> Option<PropertyInfo> {
        let options = options
            .clone()
            .with_generic_context(self.generic_context.clone());
        ctx.in_file(self.file_path.clone(), |ctx| {
            analyzer.analyze(name, &self.node, ctx, &options)
        })
    }
}

/// Resolve `node` from the current point of analysis
pub fn resolve_type_node(
    node: &TypeNode,
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
) -> ResolvedTypeNode {
    ResolvedTypeNode::at(node, ctx, options).resolve(ctx, analyzer, options.max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_gen_parser::{parse_type, Keyword};
    use fluent_gen_project::Project;
    use std::path::Path;

    #[test]
    fn test_follows_alias_chain_across_files() {
        let mut project = Project::new();
        project
            .add_source("/main.ts", r#"import { Maybe } from "./maybe"; type Name = Maybe<string>;"#)
            .unwrap();
        project
            .add_source("/maybe.ts", "export type Maybe<T> = T | null;")
            .unwrap();

        let mut ctx = ExtractorContext::new(&project, "/main.ts");
        let options = AnalyzeOptions::default();
        let analyzer = TypeAnalyzer::new();
        let node = parse_type("Name").unwrap();

        let resolved = resolve_type_node(&node, &mut ctx, &options, &analyzer);
        assert_eq!(resolved.node.text, "T | null");
        assert_eq!(resolved.file_path, Path::new("/maybe.ts"));

        let members = resolved.union_members();
        let first = resolved
            .member(&members[0])
            .resolve(&mut ctx, &analyzer, options.max_depth);
        assert!(first.node.is_keyword(Keyword::String));
        assert_eq!(first.file_path, Path::new("/main.ts"));

        assert_eq!(ctx.dependencies().len(), 2);
    }

    #[test]
    fn test_stops_at_interfaces() {
        let mut project = Project::new();
        project.add_source("/a.ts", "interface User {}").unwrap();
        let mut ctx = ExtractorContext::new(&project, "/a.ts");
        let node = parse_type("User").unwrap();

        let resolved =
            resolve_type_node(&node, &mut ctx, &AnalyzeOptions::default(), &TypeAnalyzer::new());
        assert_eq!(resolved.node.text, "User");
        assert!(ctx.dependencies().is_empty());
    }
}
