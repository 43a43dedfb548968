//! Core domain logic for typed-styles
//!
//! The validation engine depends on external collaborators only through the
//! port traits; the one direct filesystem access is reading declaration files.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ClassNames, CheckOutcome, ValidationReport, options)
//! - `services/` - Consistency checker and validation orchestrator
//! - `ports/` - Trait definitions for generation, path lookup and alerting

pub mod models;
pub mod ports;
pub mod services;
