//! Package aggregation and the discovery pass.
//!
//! `discover` fans out over packages and their rule directories with rayon
//! and fans back in to a `Vec<Package>` ordered by the glob walk, never by
//! completion order.

use crate::config::Layout;
use crate::error::{GenError, Result};
use crate::introspect;
use crate::locate;
use crate::models::{Package, PackageId, PackageManifest, Rule};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Combine a package identity with its manifest and ordered rules.
pub fn compose(id: PackageId, manifest: PackageManifest, rules: Vec<Rule>) -> Package {
    Package {
        display_name: manifest.name,
        canonical_id: id.canonical_id,
        short_id: id.short_id,
        root: id.root,
        rules,
    }
}

/// Discover every package under `root` together with its rules.
pub fn discover(root: &Path, layout: &Layout) -> Result<Vec<Package>> {
    let dirs = locate::locate_packages(root, layout)?;
    let packages: Vec<Package> = dirs
        .par_iter()
        .map(|dir| {
            let id = locate::identify(root, dir, layout);
            let manifest = locate::read_manifest(dir, layout)?;
            info!(path = %dir.display(), "preparing package");
            let rules = introspect::introspect_rules(&id, layout)?;
            Ok(compose(id, manifest, rules))
        })
        .collect::<Result<_>>()?;
    ensure_unique_rule_ids(&packages)?;
    Ok(packages)
}

fn ensure_unique_rule_ids(packages: &[Package]) -> Result<()> {
    let mut seen = HashSet::new();
    for rule in packages.iter().flat_map(|p| p.rules.iter()) {
        if !seen.insert(rule.rule_id.as_str()) {
            return Err(GenError::DuplicateRuleId {
                rule_id: rule.rule_id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_pkg(root: &Path, dir: &str, name: &str, rules: &[&str]) {
        let d = root.join("packages").join(dir);
        fs::create_dir_all(&d).unwrap();
        fs::write(d.join("package.json"), format!(r#"{{"name":"{}"}}"#, name)).unwrap();
        for r in rules {
            let rd = d.join("rules").join(r);
            fs::create_dir_all(&rd).unwrap();
            fs::write(rd.join(format!("{}.js", r)), "").unwrap();
            fs::write(rd.join("README.md"), "").unwrap();
        }
    }

    #[test]
    fn test_discover_keeps_empty_packages_in_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_pkg(root, "eslint-plugin-ts", "@scope/eslint-plugin-ts", &["b", "a"]);
        write_pkg(root, "eslint-plugin", "@scope/eslint-plugin", &[]);
        write_pkg(root, "eslint-plugin-js", "@scope/eslint-plugin-js", &["c"]);

        let pkgs = discover(root, &Layout::default()).unwrap();
        let ids: Vec<_> = pkgs.iter().map(|p| p.canonical_id.as_str()).collect();
        assert_eq!(ids, vec!["eslint-plugin", "js", "ts"]);
        assert!(!pkgs[0].has_rules());
        assert_eq!(pkgs[1].display_name, "@scope/eslint-plugin-js");
        let ts_rules: Vec<_> = pkgs[2].rules.iter().map(|r| r.rule_id.as_str()).collect();
        assert_eq!(ts_rules, vec!["ts/a", "ts/b"]);
    }

    #[test]
    fn test_duplicate_rule_ids_are_rejected() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // both directories collapse to canonical id "js"
        write_pkg(root, "eslint-plugin-js", "a", &["semi"]);
        write_pkg(root, "js", "b", &["semi"]);
        let err = discover(root, &Layout::default()).unwrap_err();
        assert!(matches!(err, GenError::DuplicateRuleId { ref rule_id } if rule_id == "js/semi"));
    }

    #[test]
    fn test_malformed_manifest_fails_the_run() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_pkg(root, "eslint-plugin-js", "js", &["a"]);
        let bad = root.join("packages/eslint-plugin-ts");
        fs::create_dir_all(&bad).unwrap();
        fs::write(bad.join("package.json"), "[]").unwrap();
        let err = discover(root, &Layout::default()).unwrap_err();
        assert!(matches!(err, GenError::MalformedManifest { .. }));
    }
}
