//! Docs table writer: `<package>/rules.md` listing every rule with its
//! description and fixable/recommended markers.

use super::write_artifact;
use crate::config::Layout;
use crate::error::Result;
use crate::models::{Artifact, ArtifactKind, Package, Rule};
use std::path::PathBuf;

pub const MARK: &str = "✅";

pub fn table_path(pkg: &Package, layout: &Layout) -> PathBuf {
    pkg.root.join(&layout.table_file)
}

fn row(rule: &Rule, layout: &Layout) -> String {
    let meta = rule.meta.as_ref();
    let description = meta.and_then(|m| m.docs_description()).unwrap_or("");
    let fixable = if meta.is_some_and(|m| m.fixable.is_fixable()) {
        MARK
    } else {
        ""
    };
    let recommended = if meta.is_some_and(|m| m.docs_recommended()) {
        MARK
    } else {
        ""
    };
    format!(
        "| [`{}`](./{}/{}) | {} | {} | {} |",
        rule.rule_id, layout.rules_dir, rule.name, description, fixable, recommended
    )
}

/// Render the rules table; lines are `\n`-joined without a trailing newline.
pub fn render(pkg: &Package, layout: &Layout) -> String {
    let mut lines = vec![
        format!("# {}", pkg.display_name),
        String::new(),
        "| Rule ID | Description | Fixable | Recommended |".to_string(),
        "| --- | --- | --- | --- |".to_string(),
    ];
    lines.extend(pkg.rules.iter().map(|r| row(r, layout)));
    lines.join("\n")
}

pub fn write_table(pkg: &Package, layout: &Layout, write: bool) -> Result<Artifact> {
    write_artifact(
        ArtifactKind::RulesTable,
        &table_path(pkg, layout),
        &render(pkg, layout),
        write,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::tests::sample_package;
    use crate::models::{Fixable, RuleDocs, RuleMeta};
    use std::path::Path;

    #[test]
    fn test_rows_render_markers_and_blanks() {
        let mut pkg = sample_package(Path::new("/repo/packages/eslint-plugin-js"), &["a", "b"]);
        pkg.rules[0].meta = Some(RuleMeta {
            fixable: Fixable::Code,
            docs: Some(RuleDocs {
                description: Some("x".into()),
                recommended: Some(true),
            }),
        });
        let out = render(&pkg, &Layout::default());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "# eslint-plugin-js");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "| [`js/a`](./rules/a) | x | ✅ | ✅ |");
        assert_eq!(lines[5], "| [`js/b`](./rules/b) |  |  |  |");
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_recommended_false_and_fixable_none_render_blank() {
        let mut pkg = sample_package(Path::new("/p"), &["a"]);
        pkg.rules[0].meta = Some(RuleMeta {
            fixable: Fixable::None,
            docs: Some(RuleDocs {
                description: None,
                recommended: Some(false),
            }),
        });
        let out = render(&pkg, &Layout::default());
        assert!(out.ends_with("| [`js/a`](./rules/a) |  |  |  |"));
    }
}
