//! Output rendering for the generate and ls commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::models::{GenerateReport, Package};
use crate::utils::{rel_slash, use_colors};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

/// Print generation results. `check` switches wording from "wrote" to
/// "would change".
pub fn print_generate(report: &GenerateReport, root: &Path, output: &str, check: bool) {
    match output {
        "json" => println!("{:#}", compose_generate_json(report, root, check)),
        _ => {
            let color = use_colors(output);
            for a in &report.artifacts {
                let file = rel_slash(&a.path, root);
                let label = match (a.changed, check) {
                    (true, true) => "✖ stale:",
                    (true, false) => "✏️  generated:",
                    (false, _) => "up to date:",
                };
                if !color {
                    println!("{} {} ({})", label, file, a.kind.label());
                } else if !a.changed {
                    println!("{} {}", label.bright_black(), file);
                } else if check {
                    println!("{} {} ({})", label.red().bold(), file.bold(), a.kind.label());
                } else {
                    println!("{} {} ({})", label.green().bold(), file.bold(), a.kind.label());
                }
            }
            let summary = format!(
                "— Summary — packages={} rules={} artifacts={} changed={}",
                report.packages,
                report.rules,
                report.artifacts.len(),
                report.changed()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the discovered inventory.
pub fn print_ls(packages: &[Package], root: &Path, output: &str) {
    match output {
        "json" => println!("{:#}", compose_ls_json(packages, root)),
        _ => {
            let color = use_colors(output);
            for pkg in packages {
                let head = format!("{} [{}]", pkg.display_name, pkg.canonical_id);
                if color {
                    println!("{} {}", head.bold(), rel_slash(&pkg.root, root).bright_black());
                } else {
                    println!("{} {}", head, rel_slash(&pkg.root, root));
                }
                for rule in &pkg.rules {
                    let meta = rule.meta.as_ref();
                    let mut flags = Vec::new();
                    if meta.is_some_and(|m| m.fixable.is_fixable()) {
                        flags.push("fixable");
                    }
                    if meta.is_some_and(|m| m.docs_recommended()) {
                        flags.push("recommended");
                    }
                    if flags.is_empty() {
                        println!("  {}", rule.rule_id);
                    } else {
                        println!("  {} ({})", rule.rule_id, flags.join(", "));
                    }
                }
            }
        }
    }
}

/// Compose generate JSON object (pure) for testing purposes.
pub fn compose_generate_json(report: &GenerateReport, root: &Path, check: bool) -> JsonVal {
    let items: Vec<_> = report
        .artifacts
        .iter()
        .map(|a| {
            json!({
                "kind": a.kind,
                "path": rel_slash(&a.path, root),
                "changed": a.changed,
                "wrote": a.wrote,
            })
        })
        .collect();
    let summary = json!({
        "packages": report.packages,
        "rules": report.rules,
        "artifacts": report.artifacts.len(),
        "changed": report.changed(),
        "check": check,
    });
    json!({"results": items, "summary": summary})
}

/// Compose ls JSON object (pure) for testing purposes.
pub fn compose_ls_json(packages: &[Package], root: &Path) -> JsonVal {
    let items: Vec<_> = packages
        .iter()
        .map(|p| {
            let rules: Vec<_> = p
                .rules
                .iter()
                .map(|r| {
                    json!({
                        "name": r.name,
                        "ruleId": r.rule_id,
                        "entry": rel_slash(&r.entry_path, root),
                        "docs": rel_slash(&r.docs_path, root),
                        "meta": r.meta,
                    })
                })
                .collect();
            json!({
                "name": p.display_name,
                "pkgId": p.canonical_id,
                "shortId": p.short_id,
                "path": rel_slash(&p.root, root),
                "rules": rules,
            })
        })
        .collect();
    json!({ "packages": items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Artifact, ArtifactKind, Fixable, Rule, RuleMeta};
    use std::path::PathBuf;

    #[test]
    fn test_compose_generate_json_shape() {
        let root = PathBuf::from("/repo");
        let report = GenerateReport {
            packages: 2,
            rules: 1,
            artifacts: vec![
                Artifact {
                    kind: ArtifactKind::RulesIndex,
                    path: root.join("packages/p/rules/index.js"),
                    changed: true,
                    wrote: false,
                },
                Artifact {
                    kind: ArtifactKind::RewriteMap,
                    path: root.join("docs/.vitepress/rewrite.mts"),
                    changed: false,
                    wrote: false,
                },
            ],
        };
        let out = compose_generate_json(&report, &root, true);
        assert_eq!(out["summary"]["changed"], 1);
        assert_eq!(out["summary"]["check"], true);
        assert_eq!(out["results"][0]["kind"], "rules-index");
        assert_eq!(out["results"][0]["path"], "packages/p/rules/index.js");
        assert_eq!(out["results"][1]["kind"], "rewrite-map");
    }

    #[test]
    fn test_compose_ls_json_shape() {
        let root = PathBuf::from("/repo");
        let pkg_root = root.join("packages/eslint-plugin-js");
        let packages = vec![Package {
            display_name: "@scope/eslint-plugin-js".into(),
            canonical_id: "js".into(),
            short_id: "js".into(),
            root: pkg_root.clone(),
            rules: vec![Rule {
                name: "semi".into(),
                rule_id: "js/semi".into(),
                entry_path: pkg_root.join("rules/semi/semi.js"),
                docs_path: pkg_root.join("rules/semi/README.md"),
                meta: Some(RuleMeta {
                    fixable: Fixable::Code,
                    docs: None,
                }),
            }],
        }];
        let out = compose_ls_json(&packages, &root);
        assert_eq!(out["packages"][0]["pkgId"], "js");
        assert_eq!(out["packages"][0]["rules"][0]["ruleId"], "js/semi");
        assert_eq!(
            out["packages"][0]["rules"][0]["docs"],
            "packages/eslint-plugin-js/rules/semi/README.md"
        );
        assert_eq!(out["packages"][0]["rules"][0]["meta"]["fixable"], "code");
    }
}
