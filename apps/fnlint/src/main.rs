//! fnlint CLI binary entry point.
//! Merges flags with the discovered config file, runs the lint, and maps
//! the outcome to an exit code.

use clap::Parser;
use fnlint::cli::{Cli, Commands, LintArgs};
use fnlint::{config, utils, Error, Fnlint};
use std::error::Error as _;
use std::path::PathBuf;
use std::process;

fn main() {
    // Logs go to stderr so they never mix with reporter output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Formats => {
            for name in Fnlint::new().registry().names() {
                println!("{}", name);
            }
        }
        Commands::Lint(args) => process::exit(run_lint(&args)),
    }
}

fn run_lint(args: &LintArgs) -> i32 {
    let start = PathBuf::from(args.base_path.as_deref().unwrap_or("."));
    let start = std::path::absolute(&start).unwrap_or(start);
    let (options, found) = match config::effective_options(args.to_options(), &start) {
        Ok(o) => o,
        Err(e) => return fail(&Error::from(e)),
    };
    if !found {
        eprintln!(
            "{} No fnlint config found (fnlint.toml|yaml|yml); using flags and defaults.",
            utils::note_prefix()
        );
    }
    match Fnlint::new().lint_blocking(&options) {
        Ok(results) if results.iter().all(|r| r.passed) => {
            if results.is_empty() {
                eprintln!("{} No files matched.", utils::info_prefix());
            }
            0
        }
        Ok(_) => 1,
        Err(e) => fail(&e),
    }
}

fn fail(err: &Error) -> i32 {
    eprintln!("{} {}", utils::error_prefix(), err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  Caused by: {}", cause);
        source = cause.source();
    }
    2
}
