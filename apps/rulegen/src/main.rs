//! rulegen CLI binary entry point.
//! Resolves configuration, runs discovery/generation and prints results.

use clap::Parser;
use rulegen::cli::{Cli, Commands};
use rulegen::config::{self, Effective};
use rulegen::utils::{error_prefix, info_prefix, note_prefix, use_colors};
use rulegen::{aggregate, generate, logging, output};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(
        logging::level_from_flags(cli.verbose, cli.quiet),
        use_colors("human"),
    );
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Generate {
            repo_root,
            check,
            output,
        } => {
            let eff = resolve(repo_root.as_deref(), output.as_deref(), cli.quiet);
            let report = match generate::run_generate(&eff.repo_root, &eff.layout, !check) {
                Ok(r) => r,
                Err(e) => fail(e),
            };
            output::print_generate(&report, &eff.repo_root, &eff.output, check);
            if check && report.changed() > 0 {
                if eff.output != "json" {
                    eprintln!(
                        "{} {}",
                        info_prefix(),
                        "Artifacts are stale. Run `rulegen generate` and commit the result."
                    );
                }
                std::process::exit(1);
            }
        }
        Commands::Ls { repo_root, output } => {
            let eff = resolve(repo_root.as_deref(), output.as_deref(), cli.quiet);
            match aggregate::discover(&eff.repo_root, &eff.layout) {
                Ok(packages) => output::print_ls(&packages, &eff.repo_root, &eff.output),
                Err(e) => fail(e),
            }
        }
    }
}

fn resolve(repo_root: Option<&str>, output: Option<&str>, quiet: bool) -> Effective {
    let eff = match config::resolve_effective(repo_root, output) {
        Ok(eff) => eff,
        Err(e) => fail(e),
    };
    // Friendly note if no rulegen config was found
    if eff.config_path.is_none() && eff.output != "json" && !quiet {
        eprintln!(
            "{} {}",
            note_prefix(),
            "No rulegen.toml found; using defaults."
        );
    }
    eff
}

fn fail(e: rulegen::GenError) -> ! {
    eprintln!("{} {}", error_prefix(), e);
    std::process::exit(2);
}
