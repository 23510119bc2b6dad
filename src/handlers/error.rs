//! Process-wide error handler
//!
//! Writes one diagnostic line per failed event. The chat is never told.

use tracing::error;
use crate::models::InboundEvent;
use crate::utils::errors::GroupKeeperError;

/// Log a handler failure together with the event that caused it
pub fn log_handler_error(event: &InboundEvent, err: &GroupKeeperError) {
    error!(
        severity = %err.severity(),
        recoverable = err.is_recoverable(),
        "Update {:?} caused error {}",
        event,
        err
    );
}
