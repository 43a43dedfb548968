//! Run configuration
//!
//! A [`Config`] is built once per run and shared unchanged by every check,
//! so all files in a batch are compared against the same generation settings.
//! Values come from an optional `typed-styles.toml` file and are then
//! overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Semaphore;

use crate::core::models::{ExportType, LogLevel, NameFormat, QuoteType};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "typed-styles.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// The config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// A value is syntactically fine but not usable
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Options threaded through generation and declaration path derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Transformation applied to class names
    pub name_format: NameFormat,
    /// Named or default export
    pub export_type: ExportType,
    /// Alias of the key union for default exports
    pub export_type_name: String,
    /// Name of the object type for default exports
    pub export_type_interface: String,
    /// Quote character for default-export keys
    pub quote_type: QuoteType,
    /// Text prepended to every declaration
    pub banner: Option<String>,
    /// Folder holding declarations, mirroring source paths
    pub output_folder: Option<PathBuf>,
    /// Use `a.d.scss.ts` instead of `a.scss.d.ts`
    pub allow_arbitrary_extensions: bool,
    /// Glob patterns excluded from the file set
    pub ignore: Vec<String>,
    /// Verbosity of the alert sink
    pub log_level: LogLevel,
    /// Upper bound on in-flight checks (unbounded when unset)
    pub concurrency: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_format: NameFormat::default(),
            export_type: ExportType::default(),
            export_type_name: "ClassNames".to_string(),
            export_type_interface: "Styles".to_string(),
            quote_type: QuoteType::default(),
            banner: None,
            output_folder: None,
            allow_arbitrary_extensions: false,
            ignore: Vec::new(),
            log_level: LogLevel::default(),
            concurrency: None,
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load `path` if given, else the default file in `dir` if present, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            log::debug!("Using config file {}", default_path.display());
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values that would make every check fail for the wrong reason
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.concurrency {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "concurrency",
                    reason: "must be at least 1".to_string(),
                });
            },
            Some(n) if n > Semaphore::MAX_PERMITS => {
                return Err(ConfigError::InvalidValue {
                    field: "concurrency",
                    reason: format!("must be at most {}", Semaphore::MAX_PERMITS),
                });
            },
            _ => {},
        }
        for (field, value) in [
            ("export_type_name", &self.export_type_name),
            ("export_type_interface", &self.export_type_interface),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
