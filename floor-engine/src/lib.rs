//! Floor Engine - restaurant host seating recommendations
//!
//! Tracks which of the 36 floor tables are seated, splits the floor into
//! one section per active server, and recommends the table for the next
//! walk-in party so that work rotates fairly between servers.
//!
//! # Module structure
//!
//! ```text
//! floor-engine/src/
//! ├── layout/    # table shapes, windows, section partition
//! ├── floor/     # commands, events, recommendation, FloorManager
//! ├── core/      # configuration
//! ├── common/    # logging
//! └── console.rs # line-oriented host console
//! ```

pub mod common;
pub mod console;
pub mod core;
pub mod floor;
pub mod layout;

pub use core::Config;
pub use floor::{FloorError, FloorManager, ManagerError, ManagerResult};
pub use shared::{AppError, AppResult, ErrorCode};

/// Load `.env`, read configuration and initialize logging
///
/// Returns the loaded configuration. Call once, from inside the tokio
/// runtime so the log cleanup task can be scheduled.
pub fn setup_environment() -> anyhow::Result<Config> {
    if let Err(e) = dotenv::dotenv() {
        // A missing .env file is normal
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }

    let config = Config::from_env()?;
    common::init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
        config.log_retention_days,
    )?;
    layout::verify_layout()?;

    tracing::info!(
        environment = %config.environment,
        servers = %config.initial_server_count,
        log_dir = ?config.log_dir,
        "Environment ready"
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
+--------------------------------+
|   floor-host  seating console  |
+--------------------------------+
    "#
    );
}
