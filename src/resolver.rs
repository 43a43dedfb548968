//! Resolver - expands a glob pattern into the set of stylesheets to check
//!
//! Resolution is synchronous and happens once per run. Paths are returned in
//! the order the glob crate enumerates them; callers must not depend on it.
//!
//! # Examples
//!
//! ```no_run
//! use typed_styles::resolver::FileSetResolver;
//!
//! let resolver = FileSetResolver::new(&["**/node_modules/**"]).unwrap();
//! let files = resolver.resolve("src/**/*.scss").unwrap();
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, PatternError};
use thiserror::Error;

/// Extensions searched when the pattern names a directory
pub const DEFAULT_EXTENSIONS: &[&str] = &["scss", "css"];

/// Wildcards never match a leading dot, so dotfiles and dot-directories
/// are only visited when the pattern names them literally
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Errors that can occur during resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Pattern is not valid glob syntax
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Underlying error
        #[source]
        source: PatternError,
    },
}

/// Expands patterns into deduplicated file lists
#[derive(Debug, Clone, Default)]
pub struct FileSetResolver {
    ignore: Vec<Pattern>,
}

impl FileSetResolver {
    /// Create a resolver that drops files matching any of `ignore`
    pub fn new<S: AsRef<str>>(ignore: &[S]) -> Result<Self, ResolveError> {
        let ignore = ignore
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref()).map_err(|source| ResolveError::InvalidPattern {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ignore })
    }

    /// Expand `pattern` into the files it matches
    ///
    /// A pattern naming an existing directory is expanded to every stylesheet
    /// beneath it. Directories are never part of the result. An empty result
    /// is not an error.
    pub fn resolve(&self, pattern: &str) -> Result<Vec<PathBuf>, ResolveError> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for expanded in expand_pattern(pattern) {
            let paths = glob::glob_with(&expanded, MATCH_OPTIONS).map_err(|source| {
                ResolveError::InvalidPattern {
                    pattern: expanded.clone(),
                    source,
                }
            })?;

            for entry in paths {
                let path = match entry {
                    Ok(path) => path,
                    Err(err) => {
                        log::warn!("Skipping unreadable path: {err}");
                        continue;
                    },
                };
                if path.is_dir() || self.is_ignored(&path) {
                    continue;
                }
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        log::debug!("Pattern {pattern:?} resolved to {} file(s)", files.len());
        Ok(files)
    }

    /// Whether `path` matches an ignore pattern
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        self.ignore.iter().any(|p| p.matches_path(path))
    }
}

fn expand_pattern(pattern: &str) -> Vec<String> {
    let path = Path::new(pattern);
    if !path.is_dir() {
        return vec![pattern.to_string()];
    }
    let base = Pattern::escape(pattern.trim_end_matches(['/', '\\']));
    DEFAULT_EXTENSIONS.iter().map(|ext| format!("{base}/**/*.{ext}")).collect()
}
