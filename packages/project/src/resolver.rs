/// Module specifier resolution
///
/// Relative specifiers resolve against the importing file; bare package
/// specifiers resolve against the configured module directories.
use fluent_gen_common::{normalize_path, FileSystem};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Where an import specifier points
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModuleTarget {
    /// A project source file
    Local(PathBuf),
    /// A package declaration file found in a module directory
    External { specifier: String, path: PathBuf },
}

impl ModuleTarget {
    pub fn path(&self) -> &Path {
        match self {
            ModuleTarget::Local(path) => path,
            ModuleTarget::External { path, .. } => path,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, ModuleTarget::External { .. })
    }
}

const SOURCE_EXTENSIONS: [&str; 3] = [".ts", ".tsx", ".d.ts"];

/// Resolves import specifiers to files
#[derive(Clone, Debug, Default)]
pub struct ModuleResolver {
    module_dirs: Vec<PathBuf>,
}

impl ModuleResolver {
    pub fn new(module_dirs: Vec<PathBuf>) -> Self {
        Self { module_dirs }
    }

    pub fn module_dirs(&self) -> &[PathBuf] {
        &self.module_dirs
    }

    pub fn add_module_dir(&mut self, dir: PathBuf) {
        if !self.module_dirs.contains(&dir) {
            self.module_dirs.push(dir);
        }
    }

    /// Resolve `specifier` as imported from `importing_file`
    pub fn resolve(
        &self,
        specifier: &str,
        importing_file: &Path,
        fs: &dyn FileSystem,
    ) -> Option<ModuleTarget> {
        if is_relative(specifier) {
            relative_candidates(importing_file, specifier)
                .into_iter()
                .find(|candidate| fs.exists(candidate))
                .map(|path| ModuleTarget::Local(canonical(fs, &path)))
        } else {
            self.package_candidates(specifier)
                .into_iter()
                .find(|candidate| fs.exists(candidate))
                .map(|path| ModuleTarget::External {
                    specifier: specifier.to_string(),
                    path: canonical(fs, &path),
                })
        }
    }

    /// Declaration files a package specifier may live in, in lookup order
    pub fn package_candidates(&self, specifier: &str) -> Vec<PathBuf> {
        // `@scope/pkg` is published to DefinitelyTyped as `@types/scope__pkg`
        let types_name = specifier
            .strip_prefix('@')
            .map(|scoped| scoped.replacen('/', "__", 1))
            .unwrap_or_else(|| specifier.to_string());

        let mut candidates = Vec::new();
        for dir in &self.module_dirs {
            let base = dir.join(specifier);
            candidates.push(with_suffix(&base, ".d.ts"));
            candidates.push(base.join("index.d.ts"));
            candidates.push(base.join("index.ts"));
            candidates.push(dir.join("@types").join(&types_name).join("index.d.ts"));
        }
        candidates
    }
}

pub fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../") || specifier == "." || specifier == ".."
}

/// Files a relative specifier may refer to, in lookup order
pub fn relative_candidates(importing_file: &Path, specifier: &str) -> Vec<PathBuf> {
    let dir = importing_file.parent().unwrap_or_else(|| Path::new(""));
    let base = normalize_path(&dir.join(specifier));

    let mut candidates = Vec::new();

    // Explicit extensions; `.js` specifiers point at their `.ts` source
    match base.extension().and_then(|ext| ext.to_str()) {
        Some("ts") | Some("tsx") => candidates.push(base.clone()),
        Some("js") | Some("mjs") => {
            candidates.push(base.with_extension("ts"));
            candidates.push(base.with_extension("tsx"));
            candidates.push(base.with_extension("d.ts"));
        }
        _ => {}
    }

    for ext in SOURCE_EXTENSIONS {
        candidates.push(with_suffix(&base, ext));
    }
    for ext in SOURCE_EXTENSIONS {
        candidates.push(base.join(format!("index{}", ext)));
    }

    candidates
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}

fn canonical(fs: &dyn FileSystem, path: &Path) -> PathBuf {
    fs.canonicalize(path).unwrap_or_else(|_| normalize_path(path))
}
