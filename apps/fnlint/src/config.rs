//! Option resolution and config-file discovery.
//!
//! Callers hand in loosely-specified [`Options`]; [`resolve`] turns them into
//! a [`Resolved`] configuration for one lint invocation. The CLI additionally
//! reads `fnlint.toml|yaml|yml` from the project root and merges it below
//! command-line flags.
//! Defaults:
//! - `basePath`: current directory
//! - `exclude`: none (glob suffix `*.<defaultExtension>`)
//! - `defaultExtension`: `js`
//! - `extensions`, `directories`: false
//! - `format`: required in file-name mode, `kebab-case` in directories mode
//! - `reporter`: true
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use crate::matchers::{MatcherRegistry, DEFAULT_DIRECTORIES_FORMAT};
use crate::parsers::ExtractionStrategy;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Extension globbed for when nothing is excluded.
pub const DEFAULT_EXTENSION: &str = "js";

/// Config file names, in lookup order.
pub const CONFIG_FILES: [&str; 3] = ["fnlint.toml", "fnlint.yaml", "fnlint.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Caller-supplied lint options. Every field is optional at this stage;
/// [`resolve`] enforces what is required.
pub struct Options {
    /// Glob fragment; its first path segment is the search root.
    pub files: Option<String>,
    pub base_path: Option<String>,
    /// File names or sub-patterns excluded from the search root.
    pub exclude: Option<Vec<String>>,
    /// Check file extensions against `extension_name`.
    pub extensions: Option<bool>,
    /// Check the whole base-relative path instead of the file name.
    pub directories: Option<bool>,
    /// Name of a registered naming convention.
    pub format: Option<String>,
    pub extension_name: Option<String>,
    pub reporter: Option<bool>,
    /// human|json
    pub output: Option<String>,
    pub default_extension: Option<String>,
}

impl Options {
    /// Options for the given glob fragment, everything else defaulted.
    pub fn files(files: impl Into<String>) -> Self {
        Options {
            files: Some(files.into()),
            ..Default::default()
        }
    }

    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: Options) -> Options {
        Options {
            files: self.files.or(fallback.files),
            base_path: self.base_path.or(fallback.base_path),
            exclude: self.exclude.or(fallback.exclude),
            extensions: self.extensions.or(fallback.extensions),
            directories: self.directories.or(fallback.directories),
            format: self.format.or(fallback.format),
            extension_name: self.extension_name.or(fallback.extension_name),
            reporter: self.reporter.or(fallback.reporter),
            output: self.output.or(fallback.output),
            default_extension: self.default_extension.or(fallback.default_extension),
        }
    }
}

/// How the matcher for a run is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherSelector {
    /// Registry lookup by name.
    Format(String),
    /// Suffix matcher compiled from `extensionName`.
    Suffix(String),
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration for a single lint invocation.
pub struct Resolved {
    pub base_path: PathBuf,
    pub files: String,
    pub exclude: Vec<String>,
    pub glob_path: String,
    pub strategy: ExtractionStrategy,
    pub matcher: MatcherSelector,
    pub reporter: bool,
    pub output: String,
    pub default_extension: String,
    /// Caller options as supplied, for fields not computed here.
    pub options: Options,
}

/// Resolve `options` against `registry`.
///
/// Fails before any filesystem access when `files` is missing, when the
/// selected matcher cannot exist, or when the base path cannot be made
/// absolute.
pub fn resolve(options: &Options, registry: &MatcherRegistry) -> Result<Resolved, ConfigError> {
    let files = options
        .files
        .clone()
        .filter(|f| !f.trim().is_empty())
        .ok_or(ConfigError::MissingFiles)?;
    let base_path = resolve_base_path(options.base_path.as_deref().unwrap_or(""))?;
    let exclude = options.exclude.clone().unwrap_or_default();
    let default_extension = options
        .default_extension
        .clone()
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let glob_path = build_glob_path(&base_path, &files, &exclude, &default_extension);

    let (strategy, matcher) = select_strategy(options, registry)?;

    debug!(glob = %glob_path, strategy = strategy.name(), "resolved lint options");
    Ok(Resolved {
        base_path,
        files,
        exclude,
        glob_path,
        strategy,
        matcher,
        reporter: options.reporter.unwrap_or(true),
        output: options
            .output
            .clone()
            .unwrap_or_else(|| "human".to_string()),
        default_extension,
        options: options.clone(),
    })
}

/// Pick the extraction strategy and matcher. Extension mode wins over
/// directories mode when both are set.
fn select_strategy(
    options: &Options,
    registry: &MatcherRegistry,
) -> Result<(ExtractionStrategy, MatcherSelector), ConfigError> {
    if options.extensions.unwrap_or(false) {
        let extension_name = options
            .extension_name
            .clone()
            .filter(|e| !e.is_empty())
            .ok_or(ConfigError::MissingExtensionName)?;
        return Ok((
            ExtractionStrategy::ExtensionName {
                extension_name: extension_name.clone(),
            },
            MatcherSelector::Suffix(extension_name),
        ));
    }
    let (strategy, format) = if options.directories.unwrap_or(false) {
        let format = options
            .format
            .clone()
            .unwrap_or_else(|| DEFAULT_DIRECTORIES_FORMAT.to_string());
        (ExtractionStrategy::FullPath, format)
    } else {
        let format = options.format.clone().ok_or_else(|| ConfigError::MissingFormat {
            known: registry.known(),
        })?;
        (ExtractionStrategy::FileName, format)
    };
    if !registry.contains(&format) {
        return Err(ConfigError::UnknownFormat {
            name: format,
            known: registry.known(),
        });
    }
    Ok((strategy, MatcherSelector::Format(format)))
}

/// Glob for the search root: `<base>/<first segment of files>/` followed by
/// `!(a|b|...)` when names are excluded, else `*.<default_extension>`.
pub fn build_glob_path(
    base_path: &Path,
    files: &str,
    exclude: &[String],
    default_extension: &str,
) -> String {
    let base = base_path.to_string_lossy();
    let base = base.trim_end_matches('/');
    let root = files.split('/').next().unwrap_or("");
    let mut glob = if root.is_empty() || root == "." {
        format!("{}/", base)
    } else {
        format!("{}/{}/", base, root)
    };
    if exclude.is_empty() {
        glob.push_str("*.");
        glob.push_str(default_extension.trim_start_matches('.'));
    } else {
        glob.push_str("!(");
        glob.push_str(&exclude.join("|"));
        glob.push(')');
    }
    glob
}

/// Absolute, lexically normalized form of `path` (empty means the current directory).
fn resolve_base_path(path: &str) -> Result<PathBuf, ConfigError> {
    let raw = if path.is_empty() { "." } else { path };
    let abs = std::path::absolute(raw).map_err(|source| ConfigError::BasePath {
        path: PathBuf::from(raw),
        source,
    })?;
    let mut out = PathBuf::new();
    for comp in abs.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `fnlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_project_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load options from `fnlint.toml` or `fnlint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Result<Option<Options>, ConfigError> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|e| ConfigError::ConfigFile {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<Options>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<Options>(&s).map_err(|e| e.to_string())
        };
        let opts = parsed.map_err(|message| ConfigError::ConfigFile {
            path: path.clone(),
            message,
        })?;
        debug!(path = %path.display(), "loaded config file");
        return Ok(Some(opts));
    }
    Ok(None)
}

/// Merge CLI options over the config file discovered from `start`.
///
/// The flag is true when a config file was found. A relative `basePath` in
/// the file is taken relative to the directory holding the file.
pub fn effective_options(cli: Options, start: &Path) -> Result<(Options, bool), ConfigError> {
    let root = detect_project_root(start);
    let Some(mut file) = load_config(&root)? else {
        return Ok((cli, false));
    };
    if let Some(bp) = file.base_path.as_ref() {
        if Path::new(bp).is_relative() {
            file.base_path = Some(root.join(bp).to_string_lossy().to_string());
        }
    }
    Ok((cli.or(file), true))
}
