//! CLI argument parsing via `clap`.

use crate::config::OUTPUT_MODES;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rulegen",
    version,
    about = "Generate rule indexes, rule tables and docs rewrites for a lint-plugin monorepo",
    long_about = "rulegen scans <root>/packages/*/package.json, introspects every rule under rules/<name>/, and regenerates:\n  - rules/index.js per package (lazy rule loaders)\n  - rules.md per package (rule table)\n  - docs/.vitepress/rewrite.mts (docs path rewrites)\n\nConfiguration precedence: CLI > rulegen.toml > defaults.",
    after_help = "Examples:\n  rulegen generate\n  rulegen generate --check --output json\n  rulegen ls --repo-root ../stylistic",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current rulegen version.")]
    Version,
    /// Regenerate all artifacts
    #[command(
        about = "Regenerate artifacts",
        long_about = "Discover packages and rules, then rewrite every rule index, rules table and the docs rewrite map. With --check nothing is written and the exit code is 1 when any artifact is stale.",
        after_help = "Examples:\n  rulegen generate\n  rulegen generate --check"
    )]
    Generate {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if any artifact would change (implies no writes)")]
        check: bool,
        #[arg(long, value_parser = PossibleValuesParser::new(OUTPUT_MODES), help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// List discovered packages and rules
    #[command(
        about = "List packages and rules",
        long_about = "Print the discovered package and rule inventory without writing anything."
    )]
    Ls {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_parser = PossibleValuesParser::new(OUTPUT_MODES), help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_is_validated() {
        let cli = Cli::try_parse_from(["rulegen", "generate", "--output", "json"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Generate { output: Some(ref o), .. } if o == "json"));
        assert!(Cli::try_parse_from(["rulegen", "generate", "--output", "jsno"]).is_err());
        assert!(Cli::try_parse_from(["rulegen", "ls", "--output", "yaml"]).is_err());
    }
}
