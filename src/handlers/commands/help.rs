//! Help command handler

use crate::handlers::Outcome;
use crate::models::MessageContext;
use crate::services::ChatPlatform;
use crate::utils::errors::Result;

pub const HELP_TEXT: &str = "/start - Start the bot\n\
    /help - Show this help message\n\
    /ban - Ban a user (reply to their message, admins only)\n\
    /kick - Kick a user (reply to their message, admins only)\n";

/// Handle /help command
pub async fn handle_help<P>(platform: &P, context: &MessageContext) -> Result<Outcome>
where
    P: ChatPlatform + ?Sized,
{
    platform.send_text(context.chat_id, HELP_TEXT, Some(context.message_id)).await?;
    Ok(Outcome::Done)
}
