//! rulegen core library.
//!
//! Derives static metadata artifacts for a monorepo of lint-rule packages:
//! a lazy rule-loader index and a rules table per package, plus one docs
//! rewrite map for the whole repository.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery of `rulegen.toml|yaml` and effective layout resolution.
//! - `locate`: Package directories and their canonical/short ids.
//! - `introspect`: Rule directories and their static metadata sidecars.
//! - `aggregate`: Package records and the fan-out/fan-in discovery pass.
//! - `generate`: Rule-index, docs-table and rewrite-map writers.
//! - `models`: Package, rule, metadata and report structs.
//! - `output`: Human/JSON printers for generate/ls.
//! - `logging`: `tracing` subscriber setup.
//! - `error`: Fatal error taxonomy.
//! - `utils`: Supporting helpers.
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod introspect;
pub mod locate;
pub mod logging;
pub mod models;
pub mod output;
pub mod utils;

pub use error::{GenError, Result};
