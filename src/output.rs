//! Output formatting for human and JSON modes
//!
//! In human mode every failing file has already been reported by the alert
//! sink while the run progressed, so nothing is printed at the end. JSON mode
//! prints one machine-readable summary instead.

use serde::Serialize;

use crate::core::models::{CheckOutcome, ValidationReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a validation run
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Whether every file passed
    pub passed: bool,
    /// Number of files checked
    pub files_checked: usize,
    /// Files that did not pass
    pub failures: Vec<FailureInfo>,
}

/// A file whose check did not pass
#[derive(Debug, Serialize)]
pub struct FailureInfo {
    /// The stylesheet
    pub file: String,
    /// `missing`, `mismatch`, `error` or `aborted`
    pub outcome: String,
    /// Expected declaration path, when one was located
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<String>,
    /// Human-readable explanation
    pub message: String,
}

impl CheckResult {
    /// Summarize a validation report
    #[must_use]
    pub fn from_report(report: &ValidationReport) -> Self {
        let mut failures: Vec<FailureInfo> = report
            .files
            .iter()
            .filter_map(|r| {
                let (declaration, message) = match &r.outcome {
                    CheckOutcome::Pass => return None,
                    CheckOutcome::FailMissing { declaration } => {
                        (Some(declaration), "Type file needs to be generated".to_string())
                    },
                    CheckOutcome::FailMismatch { declaration } => {
                        (Some(declaration), "Type definitions are out of date".to_string())
                    },
                    CheckOutcome::FailError { message } => (None, message.clone()),
                };
                Some(FailureInfo {
                    file: r.file.display().to_string(),
                    outcome: r.outcome.kind().to_string(),
                    declaration: declaration.map(|d| d.display().to_string()),
                    message,
                })
            })
            .collect();
        failures.sort_by(|a, b| a.file.cmp(&b.file));

        for _ in 0..report.aborted {
            failures.push(FailureInfo {
                file: String::new(),
                outcome: "aborted".to_string(),
                declaration: None,
                message: "check task did not complete".to_string(),
            });
        }

        Self {
            passed: report.verdict().is_success(),
            files_checked: report.files.len() + report.aborted,
            failures,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {},
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
