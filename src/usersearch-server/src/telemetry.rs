//! Tracing setup for the search server
//!
//! JSON logs go to a rolling file (daily, or every 10MB) named by
//! `ServerConfig::log_file`; a plain console layer is kept for development.

use anyhow::Result;
use rolling_file::{RollingConditionBasic, RollingFileAppender};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use usersearch_core::ServerConfig;

const MAX_LOG_FILE_BYTES: u64 = 10 * 1024 * 1024;

const DEFAULT_FILTER: &str =
    "usersearch_server=debug,usersearch_core=debug,tracing_actix_web=info,actix_web=info";

fn log_path(config: &ServerConfig) -> PathBuf {
    PathBuf::from(&config.log_dir).join(&config.log_file)
}

/// Initialize tracing from the server config
///
/// Returns a guard that must be kept alive to ensure logs are flushed
pub fn init_telemetry(config: &ServerConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)?;

    let path = log_path(config);
    let file_appender = RollingFileAppender::new(
        &path,
        RollingConditionBasic::new()
            .daily()
            .max_size(MAX_LOG_FILE_BYTES),
        config.log_max_files,
    )?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Request spans from TracingLogger close once per search; that event carries the latency
    let file_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_span_events(FmtSpan::CLOSE)
        .with_current_span(true)
        .with_target(true);

    let console_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    tracing::info!(
        log_file = %path.display(),
        dataset = %config.dataset_path,
        "Telemetry initialized"
    );

    Ok(guard)
}
