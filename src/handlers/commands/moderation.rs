//! Moderation command handlers
//!
//! `/ban` and `/kick` act on the author of the message the command replies
//! to. Only chat administrators and the creator may use them. Failures of
//! the ban/unban calls are reported back to the chat instead of going to
//! the error handler.
//!
//! An admin replying to their own message will ban or kick themselves;
//! there is no self-target guard.

use teloxide::types::{ChatId, UserId};
use teloxide::RequestError;
use tracing::{debug, info, warn};
use crate::handlers::{NoticeKind, Outcome};
use crate::models::MessageContext;
use crate::services::{is_admin, ChatPlatform};
use crate::utils::errors::{GroupKeeperError, Result};
use crate::utils::logging::log_admin_action;

/// Which moderation command is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Ban,
    Kick,
}

impl ModerationAction {
    fn verb(self) -> &'static str {
        match self {
            ModerationAction::Ban => "ban",
            ModerationAction::Kick => "kick",
        }
    }

    fn gerund(self) -> &'static str {
        match self {
            ModerationAction::Ban => "banning",
            ModerationAction::Kick => "kicking",
        }
    }

    fn past(self) -> &'static str {
        match self {
            ModerationAction::Ban => "banned",
            ModerationAction::Kick => "kicked",
        }
    }

    pub fn guidance_text(self) -> String {
        format!("Please reply to a user's message to {} them.", self.verb())
    }

    pub fn denied_text(self) -> String {
        format!("Only admins can {} users.", self.verb())
    }

    pub fn success_text(self) -> String {
        format!("User has been {}.", self.past())
    }

    /// Chat-facing failure text; Telegram errors show their own description
    pub fn failure_text(self, error: &GroupKeeperError) -> String {
        match error {
            GroupKeeperError::Telegram(RequestError::Api(api)) => {
                format!("Error {} user: {}", self.gerund(), api)
            }
            GroupKeeperError::Telegram(other) => {
                format!("Error {} user: {}", self.gerund(), other)
            }
            other => format!("Error {} user: {}", self.gerund(), other),
        }
    }
}

/// Handle /ban command
pub async fn handle_ban<P>(platform: &P, context: &MessageContext) -> Result<Outcome>
where
    P: ChatPlatform + ?Sized,
{
    handle_moderation(platform, context, ModerationAction::Ban).await
}

/// Handle /kick command
pub async fn handle_kick<P>(platform: &P, context: &MessageContext) -> Result<Outcome>
where
    P: ChatPlatform + ?Sized,
{
    handle_moderation(platform, context, ModerationAction::Kick).await
}

async fn handle_moderation<P>(
    platform: &P,
    context: &MessageContext,
    action: ModerationAction,
) -> Result<Outcome>
where
    P: ChatPlatform + ?Sized,
{
    let Some(reply) = context.reply_to else {
        return Ok(Outcome::notice(NoticeKind::Guidance, action.guidance_text()));
    };

    let chat_id = context.chat_id;
    let user_id = context.sender.ok_or_else(|| {
        GroupKeeperError::InvalidInput("No user in message".to_string())
    })?;
    let target_user_id = reply.author.ok_or_else(|| {
        GroupKeeperError::InvalidInput("Replied-to message has no author".to_string())
    })?;

    debug!(
        user_id = user_id.0,
        chat_id = chat_id.0,
        target_user_id = target_user_id.0,
        action = action.verb(),
        "Processing moderation command"
    );

    if !is_admin(platform, chat_id, user_id).await? {
        info!(user_id = user_id.0, chat_id = chat_id.0, action = action.verb(), "Moderation denied for non-admin");
        return Ok(Outcome::notice(NoticeKind::Denied, action.denied_text()));
    }

    match apply(platform, chat_id, target_user_id, action).await {
        Ok(()) => {
            log_admin_action(user_id.0, action.verb(), chat_id.0, target_user_id.0);
            platform
                .send_text(chat_id, &action.success_text(), Some(context.message_id))
                .await?;
            Ok(Outcome::Done)
        }
        Err(e) => {
            warn!(
                error = %e,
                chat_id = chat_id.0,
                target_user_id = target_user_id.0,
                action = action.verb(),
                "Moderation call failed"
            );
            Ok(Outcome::notice(NoticeKind::ModerationFailed, action.failure_text(&e)))
        }
    }
}

/// Perform the membership mutation; a kick is a ban immediately lifted
async fn apply<P>(platform: &P, chat_id: ChatId, target: UserId, action: ModerationAction) -> Result<()>
where
    P: ChatPlatform + ?Sized,
{
    platform.ban_member(chat_id, target).await?;
    if action == ModerationAction::Kick {
        platform.unban_member(chat_id, target).await?;
    }
    Ok(())
}
