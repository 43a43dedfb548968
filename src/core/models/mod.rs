//! Domain models for typed-styles
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ClassNames`] - identifiers extracted from a stylesheet
//! - [`CheckOutcome`] - per-file result of the consistency check
//! - [`ValidationReport`] / [`Verdict`] - aggregate result of a run
//! - [`NameFormat`], [`ExportType`], [`QuoteType`], [`LogLevel`] - option values

mod class_names;
mod options;
mod outcome;

pub use class_names::ClassNames;
pub use options::{ExportType, LogLevel, NameFormat, QuoteType};
pub use outcome::{CheckOutcome, FileReport, ValidationReport, Verdict};
