use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "fluent-gen.config.json";

/// fluent-gen configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory source files are looked up in
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directories searched for package imports
    #[serde(default = "default_module_dirs")]
    pub module_dirs: Vec<String>,

    /// Nesting limit for type analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_module_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    /// Configured module directories followed by `extra`, relative to `cwd`
    pub fn module_dirs(&self, cwd: &Path, extra: &[PathBuf]) -> Vec<PathBuf> {
        self.module_dirs
            .iter()
            .map(PathBuf::from)
            .chain(extra.iter().cloned())
            .map(|dir| cwd.join(dir))
            .collect()
    }

    /// Resolve an input path against the working directory, then `srcDir`
    pub fn resolve_input(&self, cwd: &Path, input: &Path) -> PathBuf {
        let direct = cwd.join(input);
        if direct.exists() {
            return direct;
        }
        let in_src = self.src_dir(cwd).join(input);
        if in_src.exists() {
            in_src
        } else {
            direct
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            module_dirs: default_module_dirs(),
            max_depth: None,
        }
    }
}
