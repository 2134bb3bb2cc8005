//! Shared data models for discovery records and generation reports.

pub mod meta;
pub mod package;

pub use meta::{Fixable, RuleDocs, RuleMeta};
pub use package::{Package, PackageId, PackageManifest, Rule};

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Which generator produced an artifact.
pub enum ArtifactKind {
    RulesIndex,
    RulesTable,
    RewriteMap,
}

impl ArtifactKind {
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::RulesIndex => "rules-index",
            ArtifactKind::RulesTable => "rules-table",
            ArtifactKind::RewriteMap => "rewrite-map",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Outcome of rendering one artifact.
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// Rendered content differs from what was on disk before the run.
    pub changed: bool,
    pub wrote: bool,
}

#[derive(Debug, Clone, Serialize)]
/// Generation results container.
pub struct GenerateReport {
    pub packages: usize,
    pub rules: usize,
    pub artifacts: Vec<Artifact>,
}

impl GenerateReport {
    pub fn changed(&self) -> usize {
        self.artifacts.iter().filter(|a| a.changed).count()
    }
}
