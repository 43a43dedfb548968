//! Alerting sink port
//!
//! User-facing lines emitted while a run progresses. Every method is
//! fire-and-forget and must never fail.

/// Output channel for human-readable notices and errors
#[cfg_attr(test, mockall::automock)]
pub trait Alerts: Send + Sync {
    /// A failing file or unexpected problem
    fn error(&self, message: &str);

    /// A neutral notice (e.g. nothing to check)
    fn notice(&self, message: &str);

    /// Progress detail
    fn info(&self, message: &str);

    /// Final confirmation of a passing run
    fn success(&self, message: &str);
}
