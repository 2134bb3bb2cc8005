//! Package locator.
//!
//! Finds `<root>/<packages_dir>/*/<manifest>` and turns every matching
//! directory into a `PackageId`. Order is the sorted order of the glob walk.

use crate::config::Layout;
use crate::error::{GenError, Result};
use crate::models::{PackageId, PackageManifest};
use crate::utils;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// List package directories that carry a manifest, skipping ignored names.
pub fn locate_packages(root: &Path, layout: &Layout) -> Result<Vec<PathBuf>> {
    let base = root.join(&layout.packages_dir);
    let pattern = format!(
        "{}/*/{}",
        Pattern::escape(&base.to_string_lossy()),
        Pattern::escape(&layout.manifest)
    );
    let mut dirs = Vec::new();
    for manifest in utils::glob_visible(&pattern)? {
        let Some(dir) = manifest.parent() else {
            continue;
        };
        let ignored = dir
            .file_name()
            .map(|n| layout.ignore.iter().any(|i| n == i.as_str()))
            .unwrap_or(false);
        if ignored {
            continue;
        }
        dirs.push(dir.to_path_buf());
    }
    Ok(dirs)
}

/// Derive canonical and short ids from a package directory.
///
/// The canonical id is the directory path relative to the packages dir with
/// the first occurrence of the naming prefix removed; the short id further
/// drops the first occurrence of the family marker.
pub fn identify(root: &Path, dir: &Path, layout: &Layout) -> PackageId {
    let rel = utils::rel_slash(dir, &root.join(&layout.packages_dir));
    let canonical_id = strip_marker(&rel, &layout.naming_prefix);
    let short_id = strip_marker(&canonical_id, &layout.family_marker);
    PackageId {
        canonical_id,
        short_id,
        root: dir.to_path_buf(),
    }
}

fn strip_marker(s: &str, marker: &str) -> String {
    if marker.is_empty() {
        s.to_string()
    } else {
        s.replacen(marker, "", 1)
    }
}

/// Read and parse the manifest of a package directory.
pub fn read_manifest(dir: &Path, layout: &Layout) -> Result<PackageManifest> {
    let path = dir.join(&layout.manifest);
    let raw = fs::read_to_string(&path).map_err(|source| GenError::MissingManifest {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str::<PackageManifest>(&raw).map_err(|e| GenError::MalformedManifest {
        path,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pkg(root: &Path, dir: &str, manifest: Option<&str>) {
        let d = root.join("packages").join(dir);
        fs::create_dir_all(&d).unwrap();
        if let Some(m) = manifest {
            fs::write(d.join("package.json"), m).unwrap();
        }
    }

    #[test]
    fn test_locate_skips_dirs_without_manifest_and_ignored_names() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        pkg(root, "eslint-plugin-ts", Some(r#"{"name":"ts"}"#));
        pkg(root, "eslint-plugin-js", Some(r#"{"name":"js"}"#));
        pkg(root, "scratch", None);
        pkg(root, "node_modules", Some(r#"{"name":"dep"}"#));

        let found = locate_packages(root, &Layout::default()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["eslint-plugin-js", "eslint-plugin-ts"]);
    }

    #[test]
    fn test_locate_skips_hidden_package_dirs() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        pkg(root, "eslint-plugin-js", Some(r#"{"name":"js"}"#));
        pkg(root, ".turbo", Some(r#"{"name":"cache"}"#));

        let found = locate_packages(root, &Layout::default()).unwrap();
        assert_eq!(found, vec![root.join("packages/eslint-plugin-js")]);
    }

    #[test]
    fn test_identify_strips_prefix_and_family_marker() {
        let root = Path::new("/repo");
        let layout = Layout::default();
        let id = identify(
            root,
            &root.join("packages/eslint-plugin-stylistic-ts"),
            &layout,
        );
        assert_eq!(id.canonical_id, "stylistic-ts");
        assert_eq!(id.short_id, "ts");

        let id = identify(root, &root.join("packages/eslint-plugin-js"), &layout);
        assert_eq!(id.canonical_id, "js");
        assert_eq!(id.short_id, "js");
    }

    #[test]
    fn test_read_manifest_errors() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        pkg(root, "bad", Some("{ not json"));
        pkg(root, "noname", Some(r#"{"version":"1.0.0"}"#));
        pkg(root, "empty", None);
        let layout = Layout::default();
        let base = root.join("packages");

        assert!(matches!(
            read_manifest(&base.join("bad"), &layout),
            Err(GenError::MalformedManifest { .. })
        ));
        assert!(matches!(
            read_manifest(&base.join("noname"), &layout),
            Err(GenError::MalformedManifest { .. })
        ));
        assert!(matches!(
            read_manifest(&base.join("empty"), &layout),
            Err(GenError::MissingManifest { .. })
        ));
    }
}
