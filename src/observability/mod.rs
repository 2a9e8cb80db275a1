//! Structured logging for neodb.
//!
//! Logs are synchronous JSON lines with explicit severity levels and
//! deterministic key ordering. The logger is an injected value, not a
//! process-wide singleton; components that log borrow a `Logger`.

pub mod logger;
pub mod scope;

pub use logger::{Logger, Severity};
pub use scope::SearchScope;
