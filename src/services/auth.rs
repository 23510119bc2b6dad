//! Admin check
//!
//! Group admin verification against the live chat membership. The record is
//! fetched on every call and never cached.

use teloxide::types::{ChatId, UserId};
use tracing::debug;
use crate::services::platform::ChatPlatform;
use crate::utils::errors::Result;

/// Whether `user_id` is an administrator or the creator of `chat_id`.
///
/// A failed membership lookup is returned as an error, not as `false`, so
/// the calling handler aborts before taking any moderation action.
pub async fn is_admin<P>(platform: &P, chat_id: ChatId, user_id: UserId) -> Result<bool>
where
    P: ChatPlatform + ?Sized,
{
    let role = platform.member_role(chat_id, user_id).await?;
    let is_admin = role.is_admin();

    debug!(
        user_id = user_id.0,
        chat_id = chat_id.0,
        role = ?role,
        is_admin = is_admin,
        "Admin check completed"
    );

    Ok(is_admin)
}
