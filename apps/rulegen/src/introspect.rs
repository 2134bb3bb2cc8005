//! Rule introspector.
//!
//! Enumerates `<package>/<rules_dir>/*/` and builds one `Rule` per
//! subdirectory. Metadata comes from a sidecar `meta.{toml,json,yaml,yml}`
//! next to the rule module; the module itself is only checked for
//! readability and never executed.

use crate::config::Layout;
use crate::error::{GenError, Result};
use crate::models::{PackageId, Rule, RuleMeta};
use crate::utils;
use glob::Pattern;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sidecar file names probed for rule metadata, first match wins.
pub const META_FILES: [&str; 4] = ["meta.toml", "meta.json", "meta.yaml", "meta.yml"];

/// List rule directories of a package in sorted order.
///
/// A package without a rules directory has no rules.
pub fn rule_dirs(package_root: &Path, layout: &Layout) -> Result<Vec<PathBuf>> {
    let rules = package_root.join(&layout.rules_dir);
    if !rules.is_dir() {
        return Ok(Vec::new());
    }
    let pattern = format!("{}/*", Pattern::escape(&rules.to_string_lossy()));
    Ok(utils::glob_visible(&pattern)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

/// Introspect every rule of a package. Rules are loaded in parallel and
/// returned in directory order.
pub fn introspect_rules(id: &PackageId, layout: &Layout) -> Result<Vec<Rule>> {
    let dirs = rule_dirs(&id.root, layout)?;
    dirs.par_iter()
        .map(|dir| load_rule(id, dir, layout))
        .collect()
}

/// Build the `Rule` record for one rule directory.
pub fn load_rule(id: &PackageId, dir: &Path, layout: &Layout) -> Result<Rule> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| GenError::rule_load(dir, "rule directory has no name"))?;
    let entry_path = dir.join(layout.module_file(&name));
    let docs_path = dir.join(&layout.docs_file);

    if !entry_path.is_file() {
        return Err(GenError::rule_load(&entry_path, "rule module not found"));
    }
    fs::File::open(&entry_path).map_err(|e| GenError::rule_load(&entry_path, e))?;
    if !docs_path.is_file() {
        return Err(GenError::rule_load(&docs_path, "documentation source not found"));
    }

    let meta = load_meta(dir)?;
    debug!(rule = %name, package = %id.canonical_id, has_meta = meta.is_some(), "loaded rule");
    Ok(Rule {
        rule_id: format!("{}/{}", id.canonical_id, name),
        name,
        entry_path,
        docs_path,
        meta,
    })
}

/// Read the metadata sidecar of a rule directory, if present.
pub fn load_meta(dir: &Path) -> Result<Option<RuleMeta>> {
    let Some(path) = META_FILES.iter().map(|f| dir.join(f)).find(|p| p.is_file()) else {
        return Ok(None);
    };
    let raw = fs::read_to_string(&path).map_err(|e| GenError::rule_load(&path, e))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let parsed = match ext {
        "toml" => toml::from_str::<RuleMeta>(&raw).map_err(|e| e.to_string()),
        "json" => serde_json::from_str::<RuleMeta>(&raw).map_err(|e| e.to_string()),
        _ => serde_yaml::from_str::<RuleMeta>(&raw).map_err(|e| e.to_string()),
    };
    parsed
        .map(Some)
        .map_err(|reason| GenError::rule_load(&path, format!("invalid metadata: {}", reason)))
}
