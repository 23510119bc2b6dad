//! Start command handler

use tracing::debug;
use crate::handlers::Outcome;
use crate::models::MessageContext;
use crate::services::ChatPlatform;
use crate::utils::errors::Result;

pub const START_TEXT: &str =
    "Hello! I'm your group management bot. Use /help to see available commands.";

/// Handle /start command
pub async fn handle_start<P>(platform: &P, context: &MessageContext) -> Result<Outcome>
where
    P: ChatPlatform + ?Sized,
{
    debug!(user_id = ?context.sender, chat_id = context.chat_id.0, "Processing /start command");

    platform.send_text(context.chat_id, START_TEXT, Some(context.message_id)).await?;
    Ok(Outcome::Done)
}
