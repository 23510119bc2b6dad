//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers for join events and the content filter
//! - The router tying decoded events to handlers, and the error handler
//!
//! Handlers return `Ok(Outcome)` when they ran to completion and `Err` when
//! something failed that only the error handler should see.

pub mod commands;
pub mod error;
pub mod messages;
pub mod router;

pub use router::Router;

/// Result of a handler that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All replies were sent by the handler itself
    Done,
    /// The router should send this notice back to the chat
    Notice(Notice),
}

/// User-facing message produced instead of the normal reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Why a handler produced a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A precondition such as "reply to a message" was not met
    Guidance,
    /// The issuer is not allowed to run the command
    Denied,
    /// A moderation call failed; the error text is embedded
    ModerationFailed,
}

impl Outcome {
    pub fn notice(kind: NoticeKind, text: impl Into<String>) -> Self {
        Outcome::Notice(Notice {
            kind,
            text: text.into(),
        })
    }
}
