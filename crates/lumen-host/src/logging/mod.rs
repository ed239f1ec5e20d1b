//! Logging utilities.
//!
//! Device diagnostics and scene bookkeeping go through the `log` facade; this
//! module only owns backend initialization.

mod init;

pub use init::{init_logging, LoggingConfig};
