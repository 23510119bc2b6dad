//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured logging
//! helpers used by the moderation handlers.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped, so the caller
/// must keep it alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "groupkeeper.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .init();

    info!("Logging initialized with level: {}", config.level);
    guard
}

/// Log admin actions
pub fn log_admin_action(admin_id: u64, action: &str, chat_id: i64, target_id: u64) {
    warn!(
        admin_id = admin_id,
        action = action,
        chat_id = chat_id,
        target_id = target_id,
        "Admin action performed"
    );
}

/// Log filtered messages
pub fn log_filtered_message(chat_id: i64, user_id: Option<u64>, matched: &str) {
    info!(
        chat_id = chat_id,
        user_id = user_id,
        matched = matched,
        "Message removed by content filter"
    );
}
