//! Error kinds surfaced by the lint pipeline.
//!
//! Configuration problems are detected before any path is touched; discovery
//! failures come from the filesystem scan and are passed through unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid or incomplete lint options.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `files` was not supplied by the caller, the CLI, or a config file.
    #[error("missing required option `files` (a glob fragment such as \"src\")")]
    MissingFiles,

    /// File-name mode needs a naming convention to check against.
    #[error("missing option `format`; pass one of: {known}")]
    MissingFormat { known: String },

    /// `format` does not name a registered matcher.
    #[error("unknown format `{name}`; known formats: {known}")]
    UnknownFormat { name: String, known: String },

    /// `extensions` mode was requested without an extension to look for.
    #[error("option `extensions` requires `extensionName`")]
    MissingExtensionName,

    /// The suffix matcher could not be compiled.
    #[error("invalid extensionName `{name}`: {source}")]
    InvalidExtensionName {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// The base path could not be made absolute.
    #[error("cannot resolve base path `{}`: {source}", path.display())]
    BasePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered `fnlint.toml|yaml` could not be read or parsed.
    #[error("invalid config file `{}`: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },
}

/// Failures of the path-discovery collaborator.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("invalid glob `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Negation groups are only understood as the last path segment.
    #[error("unsupported glob `{pattern}`: a `!(...)` group must be the last path segment")]
    UnsupportedPattern { pattern: String },

    /// The background scan never reported back.
    #[error("discovery task did not complete: {0}")]
    Interrupted(String),
}

impl From<glob::GlobError> for DiscoveryError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        DiscoveryError::Io {
            path,
            source: err.into(),
        }
    }
}

/// Any failure of a lint invocation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
