use fluent_gen_parser::{TypeNode, TypeParam};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A type argument bound to a type parameter
///
/// The argument is analyzed where it was written: in `file_path`, with the
/// bindings of `scope`. This keeps `Box<T>` inside `Wrapper<T>` pointing at
/// the wrapper's `T` even when both parameters share a name.
#[derive(Debug, Clone)]
pub struct GenericBinding {
    pub node: TypeNode,
    pub file_path: PathBuf,
    pub scope: GenericContext,
}

/// Type parameter bindings in effect during analysis
///
/// Layers share their parents through `Rc`, so extending a context for a
/// nested declaration never copies the outer bindings.
#[derive(Debug, Clone, Default)]
pub struct GenericContext {
    parent: Option<Rc<GenericContext>>,
    bindings: Rc<HashMap<String, Rc<GenericBinding>>>,
}

impl GenericContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new layer over this context; inner bindings shadow outer ones
    pub fn with_substitutions(&self, substitutions: HashMap<String, Rc<GenericBinding>>) -> Self {
        if substitutions.is_empty() {
            return self.clone();
        }
        Self {
            parent: Some(Rc::new(self.clone())),
            bindings: Rc::new(substitutions),
        }
    }

    pub fn with_binding(&self, name: impl Into<String>, binding: GenericBinding) -> Self {
        let mut substitutions = HashMap::new();
        substitutions.insert(name.into(), Rc::new(binding));
        self.with_substitutions(substitutions)
    }

    /// Bind a declaration's parameters for one use site
    ///
    /// Arguments bind positionally and are evaluated at the use site.
    /// Parameters without an argument fall back to their default, which is
    /// evaluated in the declaration with the parameters bound so far.
    /// Parameters with neither stay unbound.
    pub fn for_declaration(
        params: &[TypeParam],
        args: &[TypeNode],
        use_site_file: &Path,
        use_site_scope: &GenericContext,
        declaration_file: &Path,
    ) -> Self {
        let mut context = GenericContext::new();

        for (index, param) in params.iter().enumerate() {
            let binding = match (args.get(index), &param.default) {
                (Some(arg), _) => GenericBinding {
                    node: arg.clone(),
                    file_path: use_site_file.to_path_buf(),
                    scope: use_site_scope.clone(),
                },
                (None, Some(default)) => GenericBinding {
                    node: default.clone(),
                    file_path: declaration_file.to_path_buf(),
                    scope: context.clone(),
                },
                (None, None) => continue,
            };
            context = context.with_binding(param.name.clone(), binding);
        }

        context
    }

    pub fn lookup(&self, name: &str) -> Option<Rc<GenericBinding>> {
        self.bindings
            .get(name)
            .cloned()
            .or_else(|| self.parent.as_ref().and_then(|parent| parent.lookup(name)))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.parent.as_ref().map_or(true, |p| p.is_empty())
    }

    /// Parameter name to bound type text, innermost binding winning
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        let mut snapshot = self
            .parent
            .as_ref()
            .map(|parent| parent.snapshot())
            .unwrap_or_default();
        for (name, binding) in self.bindings.iter() {
            snapshot.insert(name.clone(), binding.node.text.clone());
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_gen_parser::{parse_type, Keyword};

    fn param(name: &str, default: Option<&str>) -> TypeParam {
        TypeParam {
            name: name.to_string(),
            constraint: None,
            default: default.map(|text| parse_type(text).unwrap()),
        }
    }

    fn binding(text: &str) -> GenericBinding {
        GenericBinding {
            node: parse_type(text).unwrap(),
            file_path: PathBuf::from("/a.ts"),
            scope: GenericContext::new(),
        }
    }

    #[test]
    fn test_inner_layer_shadows_outer() {
        let outer = GenericContext::new().with_binding("T", binding("string"));
        let inner = outer.with_binding("T", binding("number"));

        assert_eq!(inner.lookup("T").unwrap().node.text, "number");
        assert_eq!(outer.lookup("T").unwrap().node.text, "string");
        assert!(inner.lookup("U").is_none());
    }

    #[test]
    fn test_empty_substitutions_reuse_context() {
        let context = GenericContext::new();
        assert!(context.with_substitutions(HashMap::new()).is_empty());
    }

    #[test]
    fn test_for_declaration_binds_args_then_defaults() {
        let params = vec![param("T", None), param("U", Some("T[]")), param("V", None)];
        let args = vec![parse_type("string").unwrap()];
        let use_site = GenericContext::new();

        let context = GenericContext::for_declaration(
            &params,
            &args,
            Path::new("/use.ts"),
            &use_site,
            Path::new("/decl.ts"),
        );

        let t = context.lookup("T").unwrap();
        assert!(t.node.is_keyword(Keyword::String));
        assert_eq!(t.file_path, PathBuf::from("/use.ts"));

        // The default sees the earlier parameter
        let u = context.lookup("U").unwrap();
        assert_eq!(u.node.text, "T[]");
        assert_eq!(u.file_path, PathBuf::from("/decl.ts"));
        assert_eq!(u.scope.lookup("T").unwrap().node.text, "string");

        assert!(context.lookup("V").is_none());
    }

    #[test]
    fn test_snapshot() {
        let context = GenericContext::new()
            .with_binding("T", binding("string"))
            .with_binding("U", binding("number"))
            .with_binding("T", binding("boolean"));

        let snapshot = context.snapshot();
        assert_eq!(snapshot.get("T").map(String::as_str), Some("boolean"));
        assert_eq!(snapshot.get("U").map(String::as_str), Some("number"));
    }
}
