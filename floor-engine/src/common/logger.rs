//! Logging Infrastructure
//!
//! Structured logging for the floor host:
//! - Console output, pretty in development and JSON in production
//! - Daily rotating application logs, removed after the retention window
//! - Daily rotating audit logs (target `"audit"`), never removed

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const APP_LOG_PREFIX: &str = "app";
const AUDIT_LOG_PREFIX: &str = "audit";
const AUDIT_TARGET: &str = "audit";

/// Delete application log files older than `retention_days`
///
/// Only `app/app.YYYY-MM-DD` files are considered; audit logs are kept.
/// Returns the number of files removed. A retention reaching past the
/// earliest representable date keeps everything.
pub fn cleanup_old_logs(log_dir: &Path, retention_days: u64) -> anyhow::Result<usize> {
    let Some(cutoff) = i64::try_from(retention_days)
        .ok()
        .and_then(chrono::Duration::try_days)
        .and_then(|retention| Local::now().date_naive().checked_sub_signed(retention))
    else {
        tracing::debug!(retention_days, "Log retention exceeds calendar range, nothing to clean");
        return Ok(0);
    };

    let app_log_dir = log_dir.join(APP_LOG_PREFIX);
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(date) = name
            .strip_prefix(APP_LOG_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

fn file_layer<S>(
    writer: RollingFileAppender,
    json_format: bool,
    audit: bool,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter = tracing_subscriber::filter::filter_fn(move |meta| {
        (meta.target() == AUDIT_TARGET) == audit
    });
    let writer = std::sync::Mutex::new(writer);

    if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    }
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Base filter (e.g. "info", "floor_engine=debug"); `RUST_LOG` wins when set
/// * `json_format` - JSON console output (production) instead of pretty output
/// * `log_dir` - Enables rolling file logs under `log_dir/app` and `log_dir/audit`
/// * `retention_days` - Age after which app log files are deleted
///
/// # Examples
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// // Development setup (console only)
/// floor_engine::common::logger::init_logger_with_file("debug", false, None, 14)?;
/// # Ok(())
/// # }
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
    retention_days: u64,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let (app_layer, audit_layer) = match log_dir {
        Some(dir) => {
            let app_log_dir = dir.join(APP_LOG_PREFIX);
            let audit_log_dir = dir.join(AUDIT_LOG_PREFIX);
            fs::create_dir_all(&app_log_dir)?;
            fs::create_dir_all(&audit_log_dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, APP_LOG_PREFIX);
            let audit_log =
                RollingFileAppender::new(Rotation::DAILY, audit_log_dir, AUDIT_LOG_PREFIX);

            (
                Some(file_layer(app_log, json_format, false)),
                Some(file_layer(audit_log, json_format, true)),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(app_layer)
        .with(audit_layer)
        .try_init()?;

    if let Some(dir) = log_dir {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(periodic_cleanup(dir.to_path_buf(), retention_days));
            }
            Err(_) => tracing::warn!("No tokio runtime, old log cleanup disabled"),
        }
    }

    Ok(())
}

/// Periodic cleanup task - runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf, retention_days: u64) {
    use tokio::time::{Duration, sleep};

    loop {
        if let Err(e) = cleanup_old_logs(&log_dir, retention_days) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
        sleep(Duration::from_secs(3600)).await;
    }
}

/// Audit log helper - records seating changes
///
/// Audit logs go to `audit/audit.YYYY-MM-DD` and are never cleaned up.
///
/// # Examples
/// ```no_run
/// # use floor_engine::audit_log;
/// audit_log!("host", "seat", "table:12");
/// audit_log!("host", "unseat", "table:12", "section 2");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($operator:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            operator = $operator,
            action = $action,
            resource = $resource,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($operator:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            operator = $operator,
            action = $action,
            resource = $resource,
            details = $details,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}
