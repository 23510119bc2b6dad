//! Error handling for GroupKeeper
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for GroupKeeper application
#[derive(Error, Debug)]
pub enum GroupKeeperError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for GroupKeeper operations
pub type Result<T> = std::result::Result<T, GroupKeeperError>;

impl GroupKeeperError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            GroupKeeperError::Telegram(_) => true,
            GroupKeeperError::Config(_) => false,
            GroupKeeperError::ConfigLoad(_) => false,
            GroupKeeperError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GroupKeeperError::Config(_) => ErrorSeverity::Critical,
            GroupKeeperError::ConfigLoad(_) => ErrorSeverity::Critical,
            GroupKeeperError::InvalidInput(_) => ErrorSeverity::Warning,
            GroupKeeperError::Telegram(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
