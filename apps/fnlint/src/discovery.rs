//! Path discovery: expands a glob into file paths, never directories.
//!
//! The `glob` crate has no extglob support, so a trailing `!(a|b|...)`
//! segment is expanded as `*` and the leaf names matching any alternative
//! are dropped afterwards.

use crate::error::DiscoveryError;
use glob::{glob_with, MatchOptions, Pattern};
use std::path::PathBuf;
use tracing::debug;

/// Source of candidate paths for a lint run.
pub trait Discover: Send + Sync {
    /// Ordered file paths matching `pattern`.
    fn discover(&self, pattern: &str) -> Result<Vec<String>, DiscoveryError>;
}

/// Shell-style matching: wildcards never match a leading `.`.
fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    }
}

/// Filesystem discovery backed by the `glob` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobDiscovery;

impl Discover for GlobDiscovery {
    fn discover(&self, pattern: &str) -> Result<Vec<String>, DiscoveryError> {
        let (positive, excluded) = split_negation(pattern)?;
        let excluded = excluded
            .iter()
            .map(|alt| {
                Pattern::new(alt).map_err(|source| DiscoveryError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let opts = match_options();
        let entries = glob_with(&positive, opts).map_err(|source| DiscoveryError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut out = Vec::new();
        for entry in entries {
            let path: PathBuf = entry?;
            if !path.is_file() {
                continue;
            }
            let leaf = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if excluded.iter().any(|p| p.matches_with(&leaf, opts)) {
                continue;
            }
            out.push(path.to_string_lossy().to_string());
        }
        debug!(pattern, found = out.len(), "discovered files");
        Ok(out)
    }
}

/// Split `dir/!(a|b)` into (`dir/*`, [`a`, `b`]). Patterns without a
/// negation group come back unchanged with no exclusions.
fn split_negation(pattern: &str) -> Result<(String, Vec<String>), DiscoveryError> {
    let (head, last) = match pattern.rfind('/') {
        Some(i) => (&pattern[..=i], &pattern[i + 1..]),
        None => ("", pattern),
    };
    if head.contains("!(") {
        return Err(DiscoveryError::UnsupportedPattern {
            pattern: pattern.to_string(),
        });
    }
    match last.strip_prefix("!(").and_then(|s| s.strip_suffix(')')) {
        Some(group) => {
            let alts = group
                .split('|')
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect();
            Ok((format!("{}*", head), alts))
        }
        None if last.contains("!(") => Err(DiscoveryError::UnsupportedPattern {
            pattern: pattern.to_string(),
        }),
        None => Ok((pattern.to_string(), Vec::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_split_negation() {
        assert_eq!(
            split_negation("/p/src/!(index.js|foo.js)").unwrap(),
            ("/p/src/*".to_string(), vec!["index.js".to_string(), "foo.js".to_string()])
        );
        assert_eq!(
            split_negation("/p/src/*.js").unwrap(),
            ("/p/src/*.js".to_string(), vec![])
        );
        assert!(matches!(
            split_negation("/p/!(x)/a.js"),
            Err(DiscoveryError::UnsupportedPattern { .. })
        ));
        assert!(matches!(
            split_negation("/p/a!(x).js"),
            Err(DiscoveryError::UnsupportedPattern { .. })
        ));
    }

    #[test]
    fn test_discover_skips_dirs_and_exclusions() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested.js")).unwrap();
        for name in ["b.js", "a.js", "index.js", "notes.md", "foo.js"] {
            fs::write(src.join(name), "").unwrap();
        }
        let base = src.to_string_lossy().to_string();

        let all = GlobDiscovery.discover(&format!("{}/*.js", base)).unwrap();
        let names: Vec<String> = all
            .iter()
            .map(|p| p.rsplit('/').next().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.js", "b.js", "foo.js", "index.js"]);

        let kept = GlobDiscovery
            .discover(&format!("{}/!(index.js|foo.js|*.md)", base))
            .unwrap();
        let names: Vec<String> = kept
            .iter()
            .map(|p| p.rsplit('/').next().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.js", "b.js"]);
    }

    #[test]
    fn test_wildcards_skip_hidden_files() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        for name in [".hidden.js", "ok.js", "other.js"] {
            fs::write(src.join(name), "").unwrap();
        }
        let base = src.to_string_lossy().to_string();
        let leaves = |found: Vec<String>| -> Vec<String> {
            found
                .iter()
                .map(|p| p.rsplit('/').next().unwrap().to_string())
                .collect()
        };

        let all = GlobDiscovery.discover(&format!("{}/*.js", base)).unwrap();
        assert_eq!(leaves(all), vec!["ok.js", "other.js"]);

        let kept = GlobDiscovery.discover(&format!("{}/!(ok.js)", base)).unwrap();
        assert_eq!(leaves(kept), vec!["other.js"]);

        let literal = GlobDiscovery.discover(&format!("{}/.hidden.js", base)).unwrap();
        assert_eq!(leaves(literal), vec![".hidden.js"]);
    }

    #[test]
    fn test_invalid_glob_is_discovery_error() {
        assert!(matches!(
            GlobDiscovery.discover("/tmp/[unclosed"),
            Err(DiscoveryError::Pattern { .. })
        ));
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = tempdir().unwrap();
        let pattern = format!("{}/absent/*.js", dir.path().to_string_lossy());
        assert!(GlobDiscovery.discover(&pattern).unwrap().is_empty());
    }
}
