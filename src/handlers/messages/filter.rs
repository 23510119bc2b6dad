//! Content filter
//!
//! Every non-command text message is checked against the denylist. Admins
//! get no exemption.

use crate::handlers::Outcome;
use crate::models::{Denylist, MessageContext};
use crate::services::ChatPlatform;
use crate::utils::errors::Result;
use crate::utils::logging::log_filtered_message;

pub const WARNING_TEXT: &str = "Please avoid using inappropriate words.";

/// Handle a plain text message
///
/// On a match the message is deleted first, then the warning is sent. A
/// failed deletion is returned as an error and no warning goes out.
pub async fn handle_text<P>(
    platform: &P,
    context: &MessageContext,
    text: &str,
    denylist: &Denylist,
) -> Result<Outcome>
where
    P: ChatPlatform + ?Sized,
{
    let Some(matched) = denylist.find_match(text) else {
        return Ok(Outcome::Done);
    };

    log_filtered_message(context.chat_id.0, context.sender.map(|u| u.0), matched);

    platform.delete_message(context.chat_id, context.message_id).await?;
    // The offending message is gone, so the warning is not a quoted reply
    platform.send_text(context.chat_id, WARNING_TEXT, None).await?;

    Ok(Outcome::Done)
}
