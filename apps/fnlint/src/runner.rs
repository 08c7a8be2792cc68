//! Pipeline wiring: resolve options, bind a linter, discover paths, lint,
//! report.
//!
//! [`Fnlint`] carries the pluggable parts (matcher registry, discovery,
//! reporter) and offers the pipeline in three forms: blocking, async, and
//! callback on a worker thread. Every invocation resolves its own
//! configuration; nothing is shared between runs except those plug-ins.

use crate::config::{self, Options, Resolved};
use crate::discovery::{Discover, GlobDiscovery};
use crate::error::{DiscoveryError, Result};
use crate::linter::Linter;
use crate::matchers::MatcherRegistry;
use crate::models::{LintRecord, Summary};
use crate::output::{ConsoleReporter, OutputMode, Reporter};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// A configured lint pipeline.
#[derive(Clone)]
pub struct Fnlint {
    registry: Arc<MatcherRegistry>,
    discovery: Arc<dyn Discover>,
    // None prints to the console in the resolved output mode.
    reporter: Option<Arc<dyn Reporter>>,
}

impl Default for Fnlint {
    fn default() -> Self {
        Fnlint {
            registry: Arc::new(MatcherRegistry::with_builtins()),
            discovery: Arc::new(GlobDiscovery),
            reporter: None,
        }
    }
}

impl Fnlint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: MatcherRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn with_discovery(mut self, discovery: impl Discover + 'static) -> Self {
        self.discovery = Arc::new(discovery);
        self
    }

    /// Replace the console printer. Still skipped when `reporter = false`.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    pub fn registry(&self) -> &MatcherRegistry {
        &self.registry
    }

    /// Resolve options and bind the linter. No filesystem access.
    pub fn prepare(&self, options: &Options) -> Result<(Resolved, Linter)> {
        let cfg = config::resolve(options, &self.registry)?;
        let linter = Linter::from_config(&cfg, &self.registry)?;
        Ok((cfg, linter))
    }

    /// Run the whole pipeline on the calling thread.
    pub fn lint_blocking(&self, options: &Options) -> Result<Vec<LintRecord>> {
        let (cfg, linter) = self.prepare(options)?;
        let paths = self.discovery.discover(&cfg.glob_path)?;
        Ok(self.finish(&cfg, &linter, &paths))
    }

    /// Run the pipeline with discovery on tokio's blocking pool.
    ///
    /// Options are resolved before the scan is scheduled, so configuration
    /// errors never reach the discovery step.
    pub async fn lint_async(&self, options: Options) -> Result<Vec<LintRecord>> {
        let (cfg, linter) = self.prepare(&options)?;
        let discovery = Arc::clone(&self.discovery);
        let pattern = cfg.glob_path.clone();
        let paths = tokio::task::spawn_blocking(move || discovery.discover(&pattern))
            .await
            .map_err(|e| DiscoveryError::Interrupted(e.to_string()))??;
        Ok(self.finish(&cfg, &linter, &paths))
    }

    /// Run the pipeline on a worker thread and hand the outcome to `callback`.
    pub fn lint<F>(&self, options: Options, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<LintRecord>>) + Send + 'static,
    {
        let runner = self.clone();
        thread::spawn(move || callback(runner.lint_blocking(&options)))
    }

    fn finish(&self, cfg: &Resolved, linter: &Linter, paths: &[String]) -> Vec<LintRecord> {
        let results = linter.lint(paths);
        let summary = Summary::of(&results);
        debug!(
            files = summary.files,
            passed = summary.passed,
            failed = summary.failed,
            matcher = %linter.matcher().describe(),
            "lint finished"
        );
        self.report(cfg, &results);
        results
    }

    fn report(&self, cfg: &Resolved, results: &[LintRecord]) {
        if !cfg.reporter {
            return;
        }
        let outcome = match &self.reporter {
            Some(r) => r.report(results),
            None => ConsoleReporter::new(OutputMode::parse(&cfg.output)).report(results),
        };
        if let Err(e) = outcome {
            warn!("reporter failed: {e}");
        }
    }
}
