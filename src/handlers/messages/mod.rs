//! Message handlers module
//!
//! Handles new member events and runs the content filter over text messages

pub mod filter;

use tracing::debug;
use crate::handlers::Outcome;
use crate::models::{MessageContext, NewMember};
use crate::services::ChatPlatform;
use crate::utils::errors::Result;

pub use filter::handle_text;

/// Greeting sent for each new member
pub fn welcome_text(display_name: &str) -> String {
    format!("Welcome, {}! Please follow the group rules.", display_name)
}

/// Handle new chat member events
///
/// One greeting per member, in the order the event lists them. The first
/// failed send aborts the remaining greetings.
pub async fn handle_new_chat_members<P>(
    platform: &P,
    context: &MessageContext,
    members: &[NewMember],
) -> Result<Outcome>
where
    P: ChatPlatform + ?Sized,
{
    for member in members {
        debug!(user_id = member.user_id.0, chat_id = context.chat_id.0, "New member joined chat");
        platform
            .send_text(
                context.chat_id,
                &welcome_text(&member.display_name),
                Some(context.message_id),
            )
            .await?;
    }

    Ok(Outcome::Done)
}
