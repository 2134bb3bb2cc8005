//! Configuration discovery and effective settings resolution.
//!
//! rulegen reads `rulegen.toml|yaml|yml` from the repository root (or the
//! closest ancestor) and merges it with CLI flags into an `Effective` config.
//! Defaults describe the usual plugin monorepo layout:
//! - `packages_dir`: `packages`
//! - `manifest`: `package.json`
//! - `ignore`: `["node_modules"]` (configured names are appended)
//! - `naming_prefix`: `eslint-plugin-`
//! - `family_marker`: `stylistic-`
//! - `rules_dir`: `rules`, `module_ext`: `js`, `docs_file`: `README.md`
//! - `index_file`: `index.js`, `table_file`: `rules.md`
//! - `rewrite_path`: `docs/.vitepress/rewrite.mts`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{GenError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["rulegen.toml", "rulegen.yaml", "rulegen.yml"];

/// Accepted values of `--output` and the `output` config key.
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `rulegen.toml|yaml`.
pub struct RulegenConfig {
    pub packages_dir: Option<String>,
    pub manifest: Option<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
    pub naming_prefix: Option<String>,
    pub family_marker: Option<String>,
    pub rules_dir: Option<String>,
    pub module_ext: Option<String>,
    pub docs_file: Option<String>,
    pub index_file: Option<String>,
    pub table_file: Option<String>,
    pub rewrite_path: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Naming conventions of the monorepo, threaded through every pipeline stage.
pub struct Layout {
    pub packages_dir: String,
    pub manifest: String,
    pub ignore: Vec<String>,
    pub naming_prefix: String,
    pub family_marker: String,
    pub rules_dir: String,
    pub module_ext: String,
    pub docs_file: String,
    pub index_file: String,
    pub table_file: String,
    pub rewrite_path: String,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            packages_dir: "packages".into(),
            manifest: "package.json".into(),
            ignore: vec!["node_modules".into()],
            naming_prefix: "eslint-plugin-".into(),
            family_marker: "stylistic-".into(),
            rules_dir: "rules".into(),
            module_ext: "js".into(),
            docs_file: "README.md".into(),
            index_file: "index.js".into(),
            table_file: "rules.md".into(),
            rewrite_path: "docs/.vitepress/rewrite.mts".into(),
        }
    }
}

impl Layout {
    /// File name of a rule's executable module, e.g. `no-tabs.js`.
    pub fn module_file(&self, rule: &str) -> String {
        if self.module_ext.is_empty() {
            rule.to_string()
        } else {
            format!("{}.{}", rule, self.module_ext)
        }
    }

    fn apply(&mut self, cfg: RulegenConfig) {
        let RulegenConfig {
            packages_dir,
            manifest,
            ignore,
            naming_prefix,
            family_marker,
            rules_dir,
            module_ext,
            docs_file,
            index_file,
            table_file,
            rewrite_path,
            output: _,
        } = cfg;
        let set = |slot: &mut String, v: Option<String>| {
            if let Some(v) = v {
                *slot = v;
            }
        };
        set(&mut self.packages_dir, packages_dir);
        set(&mut self.manifest, manifest);
        set(&mut self.naming_prefix, naming_prefix);
        set(&mut self.family_marker, family_marker);
        set(&mut self.rules_dir, rules_dir);
        set(&mut self.module_ext, module_ext);
        set(&mut self.docs_file, docs_file);
        set(&mut self.index_file, index_file);
        set(&mut self.table_file, table_file);
        set(&mut self.rewrite_path, rewrite_path);
        for name in ignore {
            if !self.ignore.contains(&name) {
                self.ignore.push(name);
            }
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub layout: Layout,
    /// Path of the config file that was applied, if any.
    pub config_path: Option<PathBuf>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `rulegen.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `RulegenConfig` from the first config file present under `root`.
///
/// Returns `Ok(None)` when no config file exists; a file that exists but does
/// not parse is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, RulegenConfig)>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|e| GenError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<RulegenConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<RulegenConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Ok(Some((path, cfg))),
            Err(reason) => Err(GenError::Config { path, reason }),
        };
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli_repo_root: Option<&str>, cli_output: Option<&str>) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let start = std::path::absolute(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);

    let mut layout = Layout::default();
    let mut output = None;
    let mut config_path = None;
    if let Some((path, cfg)) = load_config(&repo_root)? {
        if let Some(mode) = cfg.output.as_deref() {
            if !OUTPUT_MODES.contains(&mode) {
                return Err(GenError::Config {
                    path,
                    reason: format!("unknown output mode '{}' (expected human|json)", mode),
                });
            }
        }
        output = cfg.output.clone();
        layout.apply(cfg);
        config_path = Some(path);
    }

    let output = cli_output
        .map(|s| s.to_string())
        .or(output)
        .unwrap_or_else(|| "human".to_string());

    Ok(Effective {
        repo_root,
        output,
        layout,
        config_path,
    })
}
