//! Consistency checker - compares one stylesheet against its declaration
//!
//! The checker never fails: every problem becomes a [`CheckOutcome`]. It
//! emits at most one alert per file (none on a pass) and never writes to the
//! filesystem.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::core::models::CheckOutcome;
use crate::core::ports::{
    Alerts, ClassNameExtractor, DeclarationGenerator, DeclarationLocator, GenerateError,
};

/// Checks a single stylesheet
#[derive(Clone)]
pub struct ConsistencyChecker {
    extractor: Arc<dyn ClassNameExtractor>,
    generator: Arc<dyn DeclarationGenerator>,
    locator: Arc<dyn DeclarationLocator>,
    alerts: Arc<dyn Alerts>,
}

impl std::fmt::Debug for ConsistencyChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsistencyChecker").finish_non_exhaustive()
    }
}

impl ConsistencyChecker {
    /// Create a checker from its collaborators
    #[must_use]
    pub fn new(
        extractor: Arc<dyn ClassNameExtractor>,
        generator: Arc<dyn DeclarationGenerator>,
        locator: Arc<dyn DeclarationLocator>,
        alerts: Arc<dyn Alerts>,
    ) -> Self {
        Self {
            extractor,
            generator,
            locator,
            alerts,
        }
    }

    /// The sink this checker reports to
    #[must_use]
    pub fn alerts(&self) -> &Arc<dyn Alerts> {
        &self.alerts
    }

    /// Check `file` against the declaration generated under `config`
    ///
    /// A file that needs no declaration passes without looking at the disk.
    /// Content is compared exactly: whitespace and line endings count.
    pub async fn check(&self, file: &Path, config: &Config) -> CheckOutcome {
        let expected = match self.expected_declaration(file, config).await {
            Ok(Some(text)) => text,
            Ok(None) => return CheckOutcome::Pass,
            Err(err) => return self.fail_error(file, &err.to_string()),
        };

        let declaration = self.locator.locate(file, config);

        match tokio::fs::read_to_string(&declaration).await {
            Ok(actual) if actual == expected => CheckOutcome::Pass,
            Ok(_) => {
                self.alerts.error(&format!(
                    "[INVALID TYPES] Check type definitions for {}",
                    file.display()
                ));
                CheckOutcome::FailMismatch { declaration }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.alerts.error(&format!(
                    "[INVALID TYPES] Type file needs to be generated for {}",
                    file.display()
                ));
                CheckOutcome::FailMissing { declaration }
            },
            Err(err) => {
                self.fail_error(file, &format!("failed to read {}: {err}", declaration.display()))
            },
        }
    }

    async fn expected_declaration(
        &self,
        file: &Path,
        config: &Config,
    ) -> Result<Option<String>, GenerateError> {
        let class_names = self.extractor.extract(file, config).await?;
        log::debug!("{}: {} class name(s)", file.display(), class_names.len());
        self.generator.generate(&class_names, config).await
    }

    fn fail_error(&self, file: &Path, message: &str) -> CheckOutcome {
        self.alerts
            .error(&format!("An error occurred checking {}:\n{message}", file.display()));
        CheckOutcome::FailError {
            message: message.to_string(),
        }
    }
}
