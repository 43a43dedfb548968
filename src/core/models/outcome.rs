//! Check outcomes and the aggregate verdict
//!
//! A [`CheckOutcome`] is produced exactly once per checked file and never
//! mutated afterwards. The [`Verdict`] is a pure reduction over all outcomes
//! of one run.

use std::path::PathBuf;

/// Result of checking one stylesheet against its declaration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Declaration is up to date, or none is required
    Pass,
    /// A declaration is required but nothing exists at the expected path
    FailMissing {
        /// Where the declaration was expected
        declaration: PathBuf,
    },
    /// The declaration exists but its content differs from what would be generated
    FailMismatch {
        /// The stale declaration file
        declaration: PathBuf,
    },
    /// Generation or reading failed
    FailError {
        /// Rendered error
        message: String,
    },
}

impl CheckOutcome {
    /// Whether this outcome is a pass
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Short machine-readable kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::FailMissing { .. } => "missing",
            Self::FailMismatch { .. } => "mismatch",
            Self::FailError { .. } => "error",
        }
    }
}

/// Outcome of a single file within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The stylesheet that was checked
    pub file: PathBuf,
    /// What the check concluded
    pub outcome: CheckOutcome,
}

/// Overall result of one validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every file passed (or there was nothing to check)
    Passed,
    /// At least one file did not pass
    Failed,
}

impl Verdict {
    /// Whether the run passed
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Conventional process exit code for this verdict
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }
}

/// All per-file results collected by the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// One entry per file, in completion order
    pub files: Vec<FileReport>,
    /// Check tasks that ended abnormally and produced no outcome
    pub aborted: usize,
}

impl ValidationReport {
    /// Report for a run that found nothing to check
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            files: Vec::new(),
            aborted: 0,
        }
    }

    /// Reduce all outcomes to a single verdict
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.aborted == 0 && self.files.iter().all(|r| r.outcome.is_pass()) {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    /// Reports whose outcome is not a pass
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|r| !r.outcome.is_pass())
    }

    /// Outcome recorded for a given file, if any
    #[must_use]
    pub fn outcome_for(&self, file: impl AsRef<std::path::Path>) -> Option<&CheckOutcome> {
        let file = file.as_ref();
        self.files.iter().find(|r| r.file == file).map(|r| &r.outcome)
    }
}
