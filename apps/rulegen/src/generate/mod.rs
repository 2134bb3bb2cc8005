//! Artifact generation over the discovered packages.
//!
//! The three generators read the same immutable `[Package]` and write to
//! disjoint paths, so they run concurrently:
//! - `rules_index`: per package with rules, `<rules_dir>/index.js`.
//! - `docs_table`: per package with rules, `<package>/rules.md`.
//! - `rewrite`: one repository-wide docs rewrite map.
//!
//! Writes are unconditional overwrites; rendering is deterministic, so a
//! second run with unchanged inputs produces byte-identical files. When
//! `write` is false nothing touches the disk and the report only tells
//! which artifacts would change.

pub mod docs_table;
pub mod rewrite;
pub mod rules_index;

use crate::aggregate;
use crate::config::Layout;
use crate::error::{GenError, Result};
use crate::models::{Artifact, ArtifactKind, GenerateReport, Package};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Discover packages under `root` and generate every artifact.
pub fn run_generate(root: &Path, layout: &Layout, write: bool) -> Result<GenerateReport> {
    let packages = aggregate::discover(root, layout)?;
    generate(root, layout, &packages, write)
}

/// Generate artifacts for already-discovered packages.
pub fn generate(
    root: &Path,
    layout: &Layout,
    packages: &[Package],
    write: bool,
) -> Result<GenerateReport> {
    let (per_package, rewrite) = rayon::join(
        || {
            packages
                .par_iter()
                .filter(|p| p.has_rules())
                .map(|pkg| -> Result<Vec<Artifact>> {
                    let (index, table) = rayon::join(
                        || rules_index::write_index(pkg, layout, write),
                        || docs_table::write_table(pkg, layout, write),
                    );
                    Ok(vec![index?, table?])
                })
                .collect::<Result<Vec<_>>>()
        },
        || rewrite::write_rewrite(root, packages, layout, write),
    );

    let mut artifacts: Vec<Artifact> = per_package?.into_iter().flatten().collect();
    artifacts.push(rewrite?);
    Ok(GenerateReport {
        packages: packages.len(),
        rules: packages.iter().map(|p| p.rules.len()).sum(),
        artifacts,
    })
}

/// Compare `content` with what is on disk and write it when `write` is set.
pub(crate) fn write_artifact(
    kind: ArtifactKind,
    path: &Path,
    content: &str,
    write: bool,
) -> Result<Artifact> {
    let changed = match fs::read(path) {
        Ok(existing) => existing != content.as_bytes(),
        Err(_) => true,
    };
    if write {
        let to_err = |source| GenError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(to_err)?;
        }
        fs::write(path, content).map_err(to_err)?;
        debug!(kind = kind.label(), path = %path.display(), changed, "wrote artifact");
    }
    Ok(Artifact {
        kind,
        path: path.to_path_buf(),
        changed,
        wrote: write,
    })
}
