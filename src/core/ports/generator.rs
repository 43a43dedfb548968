//! Declaration generation ports
//!
//! Generation happens in two asynchronous steps: class names are extracted
//! from the stylesheet, then rendered into declaration text. Either step may
//! fail; the checker turns any failure into a failing outcome for that file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;
use crate::core::models::ClassNames;

/// Errors raised while producing the expected declaration
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Source file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The stylesheet
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Source file is malformed
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// The stylesheet
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

/// Extracts class names from a stylesheet
#[async_trait]
pub trait ClassNameExtractor: Send + Sync {
    /// Read `file` and list the class names it defines
    async fn extract(&self, file: &Path, config: &Config) -> Result<ClassNames, GenerateError>;
}

/// Renders class names into declaration text
#[async_trait]
pub trait DeclarationGenerator: Send + Sync {
    /// Produce the canonical declaration, or `None` when no declaration is required
    async fn generate(
        &self,
        class_names: &ClassNames,
        config: &Config,
    ) -> Result<Option<String>, GenerateError>;
}
