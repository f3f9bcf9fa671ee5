//! Observability module
//!
//! Structured logging for pipeline runs and the progress reporter behind
//! the user-facing status lines.

pub mod logging;
pub mod progress;

pub use logging::{LogFormat, init_logging};
pub use progress::Progress;
