//! Validation orchestrator - checks a whole file set concurrently
//!
//! One task is spawned per file onto the current runtime. The run waits for
//! every task to settle before reducing the outcomes; a failing file never
//! short-circuits its siblings.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::checker::ConsistencyChecker;
use crate::config::Config;
use crate::core::models::{FileReport, ValidationReport};
use crate::resolver::{FileSetResolver, ResolveError};

/// Runs the consistency checker over every file matching a pattern
#[derive(Debug, Clone)]
pub struct Validator {
    checker: Arc<ConsistencyChecker>,
}

impl Validator {
    /// Create a validator around a checker
    #[must_use]
    pub fn new(checker: ConsistencyChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }

    /// Resolve `pattern` and check every file under `config`
    ///
    /// Finding no files is a successful run. The only error is a pattern that
    /// cannot be resolved; per-file failures are carried in the report.
    pub async fn run(
        &self,
        pattern: &str,
        config: Arc<Config>,
    ) -> Result<ValidationReport, ResolveError> {
        let files = FileSetResolver::new(config.ignore.as_slice())?.resolve(pattern)?;

        if files.is_empty() {
            self.checker.alerts().notice("No files found.");
            return Ok(ValidationReport::empty());
        }

        self.checker.alerts().info(&format!("Checking {} file(s)...", files.len()));
        let report = self.check_all(files, config).await;

        let verdict = report.verdict();
        log::debug!(
            "Checked {} file(s), {} failing, verdict {verdict:?}",
            report.files.len(),
            report.failures().count()
        );
        if verdict.is_success() {
            self.checker.alerts().success(&format!(
                "All {} file(s) have up-to-date type definitions.",
                report.files.len()
            ));
        }

        Ok(report)
    }

    /// Check `files` concurrently and collect one report per file
    pub async fn check_all(&self, files: Vec<PathBuf>, config: Arc<Config>) -> ValidationReport {
        let limit = config.concurrency.map(|n| Arc::new(Semaphore::new(n)));
        let mut tasks = JoinSet::new();

        for file in files {
            let checker = Arc::clone(&self.checker);
            let config = Arc::clone(&config);
            let limit = limit.clone();
            tasks.spawn(async move {
                let _permit = match limit {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };
                let outcome = checker.check(&file, &config).await;
                FileReport { file, outcome }
            });
        }

        let mut report = ValidationReport::empty();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(file_report) => {
                    log::debug!(
                        "{}: {}",
                        file_report.file.display(),
                        file_report.outcome.kind()
                    );
                    report.files.push(file_report);
                },
                Err(err) => {
                    self.checker.alerts().error(&format!("A check task did not complete: {err}"));
                    report.aborted += 1;
                },
            }
        }
        report
    }
}
