//! Shared data models for lint results and printers.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Outcome of linting one discovered file.
pub struct LintRecord {
    /// Path with the base path stripped.
    pub path: String,
    pub subject: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Aggregated pass/fail counts used by printers and exit codes.
pub struct Summary {
    pub files: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn of(results: &[LintRecord]) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Summary {
            files: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let results = vec![
            LintRecord {
                path: "/a.js".into(),
                subject: "a.js".into(),
                passed: true,
            },
            LintRecord {
                path: "/B.js".into(),
                subject: "B.js".into(),
                passed: false,
            },
        ];
        assert_eq!(
            Summary::of(&results),
            Summary {
                files: 2,
                passed: 1,
                failed: 1
            }
        );
        assert_eq!(Summary::of(&[]).files, 0);
    }
}
