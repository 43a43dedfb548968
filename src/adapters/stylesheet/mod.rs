//! Stylesheet class-name extraction
//!
//! Implements `ClassNameExtractor` by reading the source asynchronously and
//! scanning it with [`scan_class_names`].

mod scanner;

use std::path::Path;

use async_trait::async_trait;

pub use scanner::scan_class_names;

use crate::config::Config;
use crate::core::models::ClassNames;
use crate::core::ports::{ClassNameExtractor, GenerateError};

/// Extracts class names from `.css` / `.scss` sources
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorScanner;

#[async_trait]
impl ClassNameExtractor for SelectorScanner {
    async fn extract(&self, file: &Path, _config: &Config) -> Result<ClassNames, GenerateError> {
        let source = tokio::fs::read_to_string(file).await.map_err(|source| GenerateError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        scan_class_names(&source).map_err(|message| GenerateError::Parse {
            path: file.to_path_buf(),
            message,
        })
    }
}
