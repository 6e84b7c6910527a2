//! System-level modules
//!
//! - Logging setup

pub mod logging;

pub use logging::{LogTarget, init_logging, log_target};
