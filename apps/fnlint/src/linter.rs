//! Lint engine: applies one path parser and one matcher to a list of paths.
//!
//! The engine holds no mutable state, so one instance can lint any number
//! of path lists and always yields the same records for the same input.

use crate::config::{MatcherSelector, Resolved};
use crate::error::ConfigError;
use crate::matchers::{Matcher, MatcherRegistry};
use crate::models::LintRecord;
use crate::parsers::ExtractionStrategy;
use std::path::Path;

/// Extractor and matcher bound for the whole run.
#[derive(Debug, Clone)]
pub struct Linter {
    base_path: String,
    strategy: ExtractionStrategy,
    matcher: Matcher,
}

impl Linter {
    pub fn new(base_path: impl Into<String>, strategy: ExtractionStrategy, matcher: Matcher) -> Self {
        Linter {
            base_path: base_path.into(),
            strategy,
            matcher,
        }
    }

    /// Bind the strategy and matcher selected by a resolved configuration.
    pub fn from_config(cfg: &Resolved, registry: &MatcherRegistry) -> Result<Self, ConfigError> {
        let matcher = match &cfg.matcher {
            MatcherSelector::Suffix(extension_name) => Matcher::suffix(extension_name)?,
            MatcherSelector::Format(name) => registry.lookup(name)?,
        };
        Ok(Linter::new(
            cfg.base_path.to_string_lossy().to_string(),
            cfg.strategy.clone(),
            matcher,
        ))
    }

    pub fn strategy(&self) -> &ExtractionStrategy {
        &self.strategy
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Lint `paths` in order, one record per path.
    ///
    /// The base path is stripped before extraction, so directory-mode
    /// subjects only contain segments inside the project.
    pub fn lint<S: AsRef<str>>(&self, paths: &[S]) -> Vec<LintRecord> {
        paths
            .iter()
            .map(|p| {
                let path = self.strip_base(p.as_ref());
                let subject = self.strategy.extract(&path);
                let passed = self.matcher.is_match(&subject);
                LintRecord {
                    path,
                    subject,
                    passed,
                }
            })
            .collect()
    }

    /// Base-relative path with a leading `/`. Only whole components are
    /// stripped; paths outside the base come back unchanged.
    fn strip_base(&self, path: &str) -> String {
        if self.base_path.is_empty() {
            return path.to_string();
        }
        match Path::new(path).strip_prefix(&self.base_path) {
            Ok(rel) => format!("/{}", rel.to_string_lossy()),
            Err(_) => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extension_linter() -> Linter {
        Linter::new(
            "/root",
            ExtractionStrategy::ExtensionName {
                extension_name: ".test.js".into(),
            },
            Matcher::suffix(".test.js").unwrap(),
        )
    }

    #[test]
    fn test_extension_scenario() {
        let out = extension_linter().lint(&["/root/lib/a.test.js", "/root/lib/b.js"]);
        assert_eq!(
            out,
            vec![
                LintRecord {
                    path: "/lib/a.test.js".into(),
                    subject: ".test.js".into(),
                    passed: true,
                },
                LintRecord {
                    path: "/lib/b.js".into(),
                    subject: ".js".into(),
                    passed: false,
                },
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let empty: [&str; 0] = [];
        assert!(extension_linter().lint(&empty).is_empty());
    }

    #[test]
    fn test_order_kept_and_duplicates_not_removed() {
        let linter = extension_linter();
        let paths = ["/root/z.js", "/root/a.test.js", "/root/z.js"];
        let out = linter.lint(&paths);
        let got: Vec<&str> = out.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(got, vec!["/z.js", "/a.test.js", "/z.js"]);
        // reuse yields identical records
        assert_eq!(out, linter.lint(&paths));
    }

    #[test]
    fn test_empty_subject_still_matched() {
        let strategy = ExtractionStrategy::ExtensionName {
            extension_name: ".md".into(),
        };
        let out = Linter::new("", strategy.clone(), Matcher::suffix(".md").unwrap()).lint(&["Makefile"]);
        assert_eq!(out[0].subject, "");
        assert!(!out[0].passed);

        let mut reg = MatcherRegistry::empty();
        reg.register("empty", |s: &str| s.is_empty());
        let out = Linter::new("", strategy, reg.lookup("empty").unwrap()).lint(&["Makefile"]);
        assert!(out[0].passed);
    }

    #[test]
    fn test_directories_mode_checks_relative_segments_only() {
        let linter = Linter::new(
            "/Users/Me/Project",
            ExtractionStrategy::FullPath,
            MatcherRegistry::with_builtins().lookup("kebab-case").unwrap(),
        );
        let out = linter.lint(&[
            "/Users/Me/Project/src/my-dir/a-file.js",
            "/Users/Me/Project/src/myDir/a-file.js",
        ]);
        assert_eq!(out[0].subject, "/src/my-dir/a-file.js");
        assert!(out[0].passed);
        assert!(!out[1].passed);
    }

    #[test]
    fn test_paths_outside_base_are_reported_unchanged() {
        let out = extension_linter().lint(&["/elsewhere/x.test.js", "/rootfs/a.js"]);
        assert_eq!(out[0].path, "/elsewhere/x.test.js");
        assert_eq!(out[1].path, "/rootfs/a.js");
    }

    #[test]
    fn test_filesystem_root_base_keeps_leading_slash() {
        let linter = Linter::new(
            "/",
            ExtractionStrategy::FileName,
            MatcherRegistry::with_builtins().lookup("kebab-case").unwrap(),
        );
        let out = linter.lint(&["/src/a.js"]);
        assert_eq!(out[0].path, "/src/a.js");
        assert_eq!(out[0].subject, "a.js");
    }
}
