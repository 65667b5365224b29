//! Common infrastructure
//!
//! - Logging setup and the `audit_log!` macro

pub mod logger;

pub use logger::{cleanup_old_logs, init_logger_with_file};
