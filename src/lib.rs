//! GroupKeeper Telegram Bot
//!
//! A small Telegram bot for group moderation: it greets new members,
//! answers /start and /help, lets chat admins ban or kick by replying to a
//! message, and removes messages containing denylisted words.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{GroupKeeperError, Result};

// Re-export main components for easy access
pub use handlers::{Outcome, Router};
pub use models::{Denylist, InboundEvent};
pub use services::ChatPlatform;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
