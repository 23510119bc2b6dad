//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod help;
pub mod moderation;
pub mod start;

use teloxide::utils::command::BotCommands;
use crate::handlers::Outcome;
use crate::models::MessageContext;
use crate::services::ChatPlatform;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "GroupKeeper commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show this help message")]
    Help,
    #[command(description = "Ban a user (reply to their message, admins only)")]
    Ban,
    #[command(description = "Kick a user (reply to their message, admins only)")]
    Kick,
}

/// Main command dispatcher
pub async fn handle_command<P>(platform: &P, context: &MessageContext, cmd: Command) -> Result<Outcome>
where
    P: ChatPlatform + ?Sized,
{
    match cmd {
        Command::Start => start::handle_start(platform, context).await,
        Command::Help => help::handle_help(platform, context).await,
        Command::Ban => moderation::handle_ban(platform, context).await,
        Command::Kick => moderation::handle_kick(platform, context).await,
    }
}
