//! CLI argument parsing via `clap`.

use crate::config::Options;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fnlint",
    version,
    about = "Lint file names against naming conventions",
    long_about = "fnlint checks that file names (or their extensions, or whole directory paths) follow a configured convention.\n\nConfiguration precedence: CLI > fnlint.toml > defaults.",
    after_help = "Examples:\n  fnlint lint --files src --format kebab-case\n  fnlint lint --files test --extensions --extension-name .test.js\n  fnlint lint --files src --directories --exclude index.js --exclude vendor\n  fnlint formats",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current fnlint version.")]
    Version,
    /// List registered naming conventions
    #[command(
        about = "List formats",
        long_about = "Print every format name accepted by --format, including aliases."
    )]
    Formats,
    /// Lint file names
    #[command(
        about = "Run the file-name lint",
        long_about = "Discover files under the first segment of --files and check each against the selected convention. Exits 1 when any file fails.",
        after_help = "Examples:\n  fnlint lint --files src --format camelCase\n  fnlint lint --files lib --extensions --extension-name .spec.ts --output json"
    )]
    Lint(LintArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct LintArgs {
    #[arg(long, help = "Glob fragment; its first segment is the search root")]
    pub files: Option<String>,
    #[arg(long, help = "Base path (default: current dir)")]
    pub base_path: Option<String>,
    #[arg(long, help = "File name or pattern to exclude (repeatable)")]
    pub exclude: Vec<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Check file extensions against --extension-name")]
    pub extensions: bool,
    #[arg(long, help = "Extension to require in --extensions mode, e.g. .test.js")]
    pub extension_name: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Check every directory segment, not just the file name")]
    pub directories: bool,
    #[arg(long, help = "Naming convention, see `fnlint formats`")]
    pub format: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Do not print results")]
    pub no_reporter: bool,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Extension globbed when nothing is excluded (default: js)")]
    pub default_extension: Option<String>,
}

impl LintArgs {
    /// Flags as options; unset flags stay `None` so config files can fill them.
    pub fn to_options(&self) -> Options {
        Options {
            files: self.files.clone(),
            base_path: self.base_path.clone(),
            exclude: if self.exclude.is_empty() {
                None
            } else {
                Some(self.exclude.clone())
            },
            extensions: self.extensions.then_some(true),
            directories: self.directories.then_some(true),
            format: self.format.clone(),
            extension_name: self.extension_name.clone(),
            reporter: self.no_reporter.then_some(false),
            output: self.output.clone(),
            default_extension: self.default_extension.clone(),
        }
    }
}
