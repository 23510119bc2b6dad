//! Chat platform abstraction
//!
//! [`ChatPlatform`] covers every outbound call the handlers make. The
//! production implementation is [`teloxide::Bot`]; tests plug in a
//! recording double.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, ReplyParameters, UserId};
use tracing::debug;
use crate::models::MemberRole;
use crate::utils::errors::Result;

/// Outbound calls available to handlers
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Send a text message to a chat, quoting `reply_to` when given.
    ///
    /// A quoted message that no longer exists does not fail the send.
    async fn send_text(&self, chat_id: ChatId, text: &str, reply_to: Option<MessageId>) -> Result<()>;

    /// Delete a message
    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()>;

    /// Fetch a user's current role in a chat
    async fn member_role(&self, chat_id: ChatId, user_id: UserId) -> Result<MemberRole>;

    /// Remove a user from a chat permanently
    async fn ban_member(&self, chat_id: ChatId, user_id: UserId) -> Result<()>;

    /// Lift a removal so the user may rejoin
    async fn unban_member(&self, chat_id: ChatId, user_id: UserId) -> Result<()>;
}

#[async_trait]
impl ChatPlatform for Bot {
    async fn send_text(&self, chat_id: ChatId, text: &str, reply_to: Option<MessageId>) -> Result<()> {
        let mut request = self.send_message(chat_id, text);
        if let Some(message_id) = reply_to {
            request = request
                .reply_parameters(ReplyParameters::new(message_id).allow_sending_without_reply());
        }
        request.await?;
        Ok(())
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        Requester::delete_message(self, chat_id, message_id).await?;
        Ok(())
    }

    async fn member_role(&self, chat_id: ChatId, user_id: UserId) -> Result<MemberRole> {
        let member = self.get_chat_member(chat_id, user_id).await?;
        let role = MemberRole::from(&member);
        debug!(user_id = user_id.0, chat_id = chat_id.0, role = ?role, "Chat member status retrieved");
        Ok(role)
    }

    async fn ban_member(&self, chat_id: ChatId, user_id: UserId) -> Result<()> {
        self.ban_chat_member(chat_id, user_id).await?;
        Ok(())
    }

    async fn unban_member(&self, chat_id: ChatId, user_id: UserId) -> Result<()> {
        self.unban_chat_member(chat_id, user_id).await?;
        Ok(())
    }
}
