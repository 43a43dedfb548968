//! Port traits (interfaces) for external collaborators
//!
//! The validation engine depends only on these traits:
//!
//! - [`ClassNameExtractor`] / [`DeclarationGenerator`] - produce the expected declaration
//! - [`DeclarationLocator`] - where a declaration is expected on disk
//! - [`Alerts`] - where notices and per-file errors go
//!
//! Implementations live in the `adapters` module; tests substitute their own.

mod alerts;
mod generator;
mod locator;

pub use alerts::Alerts;
pub use generator::{ClassNameExtractor, DeclarationGenerator, GenerateError};
pub use locator::DeclarationLocator;

#[cfg(test)]
pub use alerts::MockAlerts;
#[cfg(test)]
pub use locator::MockDeclarationLocator;
