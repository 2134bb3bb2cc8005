//! Error taxonomy for discovery and generation.
//!
//! Every variant is fatal to the run: generators assume a complete package
//! inventory, so the first failure aborts and is reported with its path.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// A directory matched the manifest pattern but the manifest could not be read.
    #[error("manifest not readable: {path}: {source}")]
    MissingManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest: {path}: {reason}")]
    MalformedManifest { path: PathBuf, reason: String },

    /// Entry module, docs source, or metadata sidecar of a rule is unusable.
    #[error("failed to load rule module: {path}: {reason}")]
    RuleModuleLoad { path: PathBuf, reason: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan '{pattern}': {reason}")]
    Scan { pattern: String, reason: String },

    #[error("duplicate rule id '{rule_id}'")]
    DuplicateRuleId { rule_id: String },

    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl GenError {
    pub(crate) fn rule_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        GenError::RuleModuleLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
