//! Reporters: render a lint result set to an output channel.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file fields and a top-level summary. Rendering is split into pure
//! `render_*`/`compose_*` functions so printers stay thin.

use crate::models::{LintRecord, Summary};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::{self, Write};

/// Sink for a finished result set. Must not reorder or alter the records.
pub trait Reporter: Send + Sync {
    fn report(&self, results: &[LintRecord]) -> io::Result<()>;
}

impl<F> Reporter for F
where
    F: Fn(&[LintRecord]) -> io::Result<()> + Send + Sync,
{
    fn report(&self, results: &[LintRecord]) -> io::Result<()> {
        self(results)
    }
}

/// Console output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl OutputMode {
    /// Anything other than `json` falls back to human output.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

/// Prints results to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    pub mode: OutputMode,
}

impl ConsoleReporter {
    pub fn new(mode: OutputMode) -> Self {
        ConsoleReporter { mode }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, results: &[LintRecord]) -> io::Result<()> {
        let text = match self.mode {
            OutputMode::Json => serde_json::to_string_pretty(&compose_lint_json(results))
                .map_err(io::Error::other)?,
            OutputMode::Human => render_human(results, use_colors(self.mode)),
        };
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }
}

fn use_colors(mode: OutputMode) -> bool {
    mode != OutputMode::Json && std::env::var_os("NO_COLOR").is_none()
}

/// Human-readable listing: one line per file, then a summary line.
pub fn render_human(results: &[LintRecord], color: bool) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    for r in results {
        let (icon, label) = if r.passed { ("✔", "pass") } else { ("✖", "fail") };
        let line = if color {
            let icon = if r.passed {
                icon.green().to_string()
            } else {
                icon.red().to_string()
            };
            let label = if r.passed {
                label.green().bold().to_string()
            } else {
                label.red().bold().to_string()
            };
            format!("{} {} {} ❲{}❳", icon, label, r.path.bold(), r.subject)
        } else {
            format!("{} {} {} ❲{}❳", icon, label, r.path, r.subject)
        };
        lines.push(line);
    }
    let s = Summary::of(results);
    let summary = format!(
        "Summary: files={} passed={} failed={}",
        s.files, s.passed, s.failed
    );
    if color {
        lines.push(summary.bold().to_string());
    } else {
        lines.push(summary);
    }
    lines.join("\n")
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(results: &[LintRecord]) -> JsonVal {
    json!({
        "results": results,
        "summary": Summary::of(results),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn sample() -> Vec<LintRecord> {
        vec![
            LintRecord {
                path: "/src/a-b.js".into(),
                subject: "a-b.js".into(),
                passed: true,
            },
            LintRecord {
                path: "/src/aB.js".into(),
                subject: "aB.js".into(),
                passed: false,
            },
        ]
    }

    #[test]
    fn test_render_human_plain() {
        let out = render_human(&sample(), false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "✔ pass /src/a-b.js ❲a-b.js❳");
        assert_eq!(lines[1], "✖ fail /src/aB.js ❲aB.js❳");
        assert_eq!(lines[2], "Summary: files=2 passed=1 failed=1");
    }

    #[test]
    fn test_compose_lint_json_shape() {
        let out = compose_lint_json(&sample());
        assert_eq!(out["summary"]["files"], 2);
        assert_eq!(out["summary"]["failed"], 1);
        assert_eq!(out["results"][1]["path"], "/src/aB.js");
        assert_eq!(out["results"][0]["passed"], true);
    }

    #[test]
    fn test_closure_reporter_sees_results_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = |results: &[LintRecord]| -> io::Result<()> {
            seen.lock()
                .unwrap()
                .extend(results.iter().map(|r| r.path.clone()));
            Ok(())
        };
        reporter.report(&sample()).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["/src/a-b.js", "/src/aB.js"]);
    }

    #[test]
    fn test_output_mode_parse() {
        assert_eq!(OutputMode::parse("JSON"), OutputMode::Json);
        assert_eq!(OutputMode::parse("human"), OutputMode::Human);
        assert_eq!(OutputMode::parse("other"), OutputMode::Human);
    }
}
