//! Path parsers: derive the subject string a matcher is tested against.
//!
//! All functions are total over any input string. When a path has no
//! meaningful subject (no file name, no extension) the result is empty and
//! the matcher decides.

use std::path::Path;

/// Which part of a path is checked. Chosen once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// The file's extension, aware of multi-part conventions such as `.test.js`.
    ExtensionName { extension_name: String },
    /// The whole path, so directory segments are checked too.
    FullPath,
    /// The leaf file name.
    FileName,
}

impl ExtractionStrategy {
    pub fn extract(&self, path: &str) -> String {
        match self {
            ExtractionStrategy::ExtensionName { extension_name } => {
                extension_suffix(path, extension_name)
            }
            ExtractionStrategy::FullPath => full_path(path),
            ExtractionStrategy::FileName => file_name(path),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExtractionStrategy::ExtensionName { .. } => "extensionName",
            ExtractionStrategy::FullPath => "directories",
            ExtractionStrategy::FileName => "fileName",
        }
    }
}

/// Bare extension of the leaf name: `a/b/c.txt` -> `txt`.
pub fn file_extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// The path exactly as given.
pub fn full_path(path: &str) -> String {
    path.to_string()
}

/// Leaf name with parent directories stripped: `a/b/c.txt` -> `c.txt`.
pub fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Dotted extension suffix of the leaf name.
///
/// Returns `extension_name` when the leaf name carries it (so `a.test.js`
/// yields `.test.js` for `extension_name = ".test.js"`), otherwise the last
/// dot segment including its dot (`b.js` -> `.js`), or empty. The match must
/// start on a dot boundary: `latest.js` does not carry `test.js`.
pub fn extension_suffix(path: &str, extension_name: &str) -> String {
    let name = file_name(path);
    let carries = match name.strip_suffix(extension_name) {
        Some(stem) if !extension_name.is_empty() && !stem.is_empty() => {
            extension_name.starts_with('.') || stem.ends_with('.')
        }
        _ => false,
    };
    if carries {
        return extension_name.to_string();
    }
    let ext = file_extension(&name);
    if ext.is_empty() {
        String::new()
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parsers() {
        assert_eq!(file_extension("a/b/c.txt"), "txt");
        assert_eq!(file_name("a/b/c.txt"), "c.txt");
        assert_eq!(full_path("a/b/c.txt"), "a/b/c.txt");
    }

    #[test]
    fn test_parsers_are_total_on_odd_input() {
        assert_eq!(file_extension("Makefile"), "");
        assert_eq!(file_extension(""), "");
        assert_eq!(file_name("plain"), "plain");
        assert_eq!(file_name(""), "");
        assert_eq!(file_name("/"), "");
        assert_eq!(extension_suffix("dir/README", ".md"), "");
        assert_eq!(file_extension(".gitignore"), "");
    }

    #[test]
    fn test_extension_suffix_prefers_configured_multi_part_extension() {
        assert_eq!(extension_suffix("/root/lib/a.test.js", ".test.js"), ".test.js");
        assert_eq!(extension_suffix("/root/lib/b.js", ".test.js"), ".js");
        assert_eq!(extension_suffix("/root/lib/b.spec.js", ".test.js"), ".js");
        // a file named exactly like the extension has no stem to carry it
        assert_eq!(extension_suffix("lib/.test.js", ".test.js"), ".js");
    }

    #[test]
    fn test_extension_suffix_requires_dot_boundary() {
        assert_eq!(extension_suffix("lib/latest.js", "test.js"), ".js");
        assert_eq!(extension_suffix("lib/a.test.js", "test.js"), "test.js");
        assert_eq!(extension_suffix("lib/ajs", "js"), "");
        assert_eq!(extension_suffix("lib/a.js", "js"), "js");
    }

    #[test]
    fn test_strategy_dispatch() {
        let ext = ExtractionStrategy::ExtensionName {
            extension_name: ".spec.ts".into(),
        };
        assert_eq!(ext.extract("src/x.spec.ts"), ".spec.ts");
        assert_eq!(ExtractionStrategy::FullPath.extract("/src/x.ts"), "/src/x.ts");
        assert_eq!(ExtractionStrategy::FileName.extract("/src/x.ts"), "x.ts");
    }
}
