//! Package and rule records produced by discovery.
//!
//! Records are built once per run and shared read-only by every generator.

use super::meta::RuleMeta;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize)]
/// The subset of a package manifest rulegen reads.
pub struct PackageManifest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Identity of a located package, before its rules are scanned.
pub struct PackageId {
    pub canonical_id: String,
    pub short_id: String,
    pub root: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    pub name: String,
    pub rule_id: String,
    pub entry_path: PathBuf,
    pub docs_path: PathBuf,
    pub meta: Option<RuleMeta>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub display_name: String,
    pub canonical_id: String,
    pub short_id: String,
    pub root: PathBuf,
    pub rules: Vec<Rule>,
}

impl Package {
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }
}
