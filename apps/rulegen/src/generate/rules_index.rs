//! Rule-index writer: `<rules_dir>/index.js` mapping each rule name to a
//! lazy `require` of its module.

use super::write_artifact;
use crate::config::Layout;
use crate::error::Result;
use crate::models::{Artifact, ArtifactKind, Package};
use crate::utils::{js_string, rel_slash};
use std::path::PathBuf;

pub fn index_path(pkg: &Package, layout: &Layout) -> PathBuf {
    pkg.root.join(&layout.rules_dir).join(&layout.index_file)
}

/// Render the loader index. Module paths are relative to the rules
/// directory so the package can be relocated as a unit.
pub fn render(pkg: &Package, layout: &Layout) -> String {
    let rules_dir = pkg.root.join(&layout.rules_dir);
    let mut out = String::from("module.exports = {\n");
    for rule in &pkg.rules {
        let rel = format!("./{}", rel_slash(&rule.entry_path, &rules_dir));
        out.push_str(&format!(
            "  {}: () => require({}),\n",
            js_string(&rule.name),
            js_string(&rel)
        ));
    }
    out.push_str("}\n");
    out
}

pub fn write_index(pkg: &Package, layout: &Layout, write: bool) -> Result<Artifact> {
    write_artifact(
        ArtifactKind::RulesIndex,
        &index_path(pkg, layout),
        &render(pkg, layout),
        write,
    )
}
