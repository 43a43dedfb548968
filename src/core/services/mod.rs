//! Validation services
//!
//! Orchestration logic that drives the ports:
//!
//! - [`checker`] - compare one stylesheet with its declaration
//! - [`validator`] - resolve a pattern and check every file concurrently

pub mod checker;
pub mod validator;

pub use checker::ConsistencyChecker;
pub use validator::Validator;
