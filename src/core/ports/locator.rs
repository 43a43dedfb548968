//! Declaration locator port
//!
//! Defines where the declaration for a stylesheet is expected to live.

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Maps a stylesheet to its declaration path
///
/// Implementations must be deterministic and must not touch the filesystem.
#[cfg_attr(test, mockall::automock)]
pub trait DeclarationLocator: Send + Sync {
    /// Expected declaration path for `file`
    fn locate(&self, file: &Path, config: &Config) -> PathBuf;
}
