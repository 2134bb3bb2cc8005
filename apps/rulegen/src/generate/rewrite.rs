//! Global rewrite writer: one module mapping each rule's docs source
//! (relative to the repository root) to `rules/<short_id>/<name>.md`.

use super::write_artifact;
use crate::config::Layout;
use crate::error::Result;
use crate::models::{Artifact, ArtifactKind, Package};
use crate::utils::{js_string, rel_slash};
use std::path::{Path, PathBuf};

pub fn rewrite_path(root: &Path, layout: &Layout) -> PathBuf {
    root.join(&layout.rewrite_path)
}

/// Mapping entries in package-then-rule order.
pub fn entries(root: &Path, packages: &[Package]) -> Vec<(String, String)> {
    packages
        .iter()
        .flat_map(|pkg| {
            pkg.rules.iter().map(move |rule| {
                (
                    rel_slash(&rule.docs_path, root),
                    format!("rules/{}/{}.md", pkg.short_id, rule.name),
                )
            })
        })
        .collect()
}

pub fn render(root: &Path, packages: &[Package]) -> String {
    let mut out = String::from("export default {\n");
    for (from, to) in entries(root, packages) {
        out.push_str(&format!("  {}: {},\n", js_string(&from), js_string(&to)));
    }
    out.push_str("}\n");
    out
}

pub fn write_rewrite(
    root: &Path,
    packages: &[Package],
    layout: &Layout,
    write: bool,
) -> Result<Artifact> {
    write_artifact(
        ArtifactKind::RewriteMap,
        &rewrite_path(root, layout),
        &render(root, packages),
        write,
    )
}
