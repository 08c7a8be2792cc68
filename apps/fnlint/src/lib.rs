//! fnlint core library.
//!
//! Checks that file names within a project follow a naming convention and
//! reports one pass/fail record per discovered file.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Option resolution, glob construction, config-file discovery.
//! - `parsers`: Subject extraction strategies (extension, full path, file name).
//! - `matchers`: Naming-convention registry and the extension suffix matcher.
//! - `linter`: Applies one parser and one matcher to a list of paths.
//! - `discovery`: Glob-based file discovery with `!(...)` exclusion groups.
//! - `output`: Reporters and human/JSON rendering.
//! - `runner`: Blocking, async, and callback forms of the pipeline.
//! - `models`: Result records and summaries.
//! - `utils`: Supporting helpers.
//!
//! ```no_run
//! use fnlint::Options;
//!
//! let opts = Options {
//!     extensions: Some(true),
//!     extension_name: Some(".test.js".into()),
//!     ..Options::files("test")
//! };
//! let results = fnlint::lint_blocking(&opts)?;
//! assert!(results.iter().all(|r| r.passed));
//! # Ok::<(), fnlint::Error>(())
//! ```
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod linter;
pub mod matchers;
pub mod models;
pub mod output;
pub mod parsers;
pub mod runner;
pub mod utils;

pub use config::Options;
pub use error::{ConfigError, DiscoveryError, Error, Result};
pub use models::{LintRecord, Summary};
pub use runner::Fnlint;

use std::thread::JoinHandle;

/// Lint on a worker thread; `callback` gets the results or the error.
pub fn lint<F>(options: Options, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Result<Vec<LintRecord>>) + Send + 'static,
{
    Fnlint::new().lint(options, callback)
}

/// Lint with discovery scheduled on tokio's blocking pool.
pub async fn lint_async(options: Options) -> Result<Vec<LintRecord>> {
    Fnlint::new().lint_async(options).await
}

/// Lint on the calling thread.
pub fn lint_blocking(options: &Options) -> Result<Vec<LintRecord>> {
    Fnlint::new().lint_blocking(options)
}
