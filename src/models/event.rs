//! Inbound event model
//!
//! Every message the dispatcher hands us is decoded once into an
//! [`InboundEvent`]. Handlers only ever see these variants, never the raw
//! teloxide update.

use teloxide::types::{ChatId, Message, MessageEntityKind, MessageId, UserId};
use teloxide::utils::command::BotCommands;
use crate::handlers::commands::Command;

/// Inbound chat event, one per handled update
#[derive(Debug, Clone)]
pub enum InboundEvent {
    /// A recognised bot command
    Command {
        context: MessageContext,
        command: Command,
    },
    /// A join service message
    MembersJoined {
        context: MessageContext,
        members: Vec<NewMember>,
    },
    /// Plain text that is not a command
    Text {
        context: MessageContext,
        text: String,
    },
}

/// Fields of the triggering message that handlers need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub sender: Option<UserId>,
    pub reply_to: Option<ReplyTarget>,
}

/// The message a command was issued in reply to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTarget {
    pub message_id: MessageId,
    pub author: Option<UserId>,
}

/// A user listed in a join service message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub user_id: UserId,
    pub display_name: String,
}

impl InboundEvent {
    /// Decode a message into an event.
    ///
    /// Returns `None` for messages no handler is interested in: media,
    /// other service messages and commands this bot does not know.
    pub fn from_message(msg: &Message, bot_username: &str) -> Option<Self> {
        let context = MessageContext::from_message(msg);

        if let Some(users) = msg.new_chat_members() {
            let members = users
                .iter()
                .map(|user| NewMember {
                    user_id: user.id,
                    display_name: user.full_name(),
                })
                .collect();
            return Some(InboundEvent::MembersJoined { context, members });
        }

        let text = msg.text()?;
        if starts_with_bot_command(msg) {
            return parse_command(text, bot_username)
                .map(|command| InboundEvent::Command { context, command });
        }

        Some(InboundEvent::Text {
            context,
            text: text.to_string(),
        })
    }

    /// Context of the triggering message
    pub fn context(&self) -> &MessageContext {
        match self {
            InboundEvent::Command { context, .. }
            | InboundEvent::MembersJoined { context, .. }
            | InboundEvent::Text { context, .. } => context,
        }
    }

    /// Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Command { .. } => "command",
            InboundEvent::MembersJoined { .. } => "members_joined",
            InboundEvent::Text { .. } => "text",
        }
    }
}

/// Telegram marks commands with a `bot_command` entity; only one at offset 0
/// makes the whole message a command. "/ text" or "//text" are plain text.
fn starts_with_bot_command(msg: &Message) -> bool {
    msg.entities().is_some_and(|entities| {
        entities
            .iter()
            .any(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand))
    })
}

/// Parse the leading command word. The name is matched case-insensitively,
/// the `@bot` suffix is kept as sent and arguments are ignored.
fn parse_command(text: &str, bot_username: &str) -> Option<Command> {
    let head = text.split_whitespace().next()?;
    let normalized = match head.split_once('@') {
        Some((name, bot)) => format!("{}@{}", name.to_lowercase(), bot),
        None => head.to_lowercase(),
    };
    Command::parse(&normalized, bot_username).ok()
}

impl MessageContext {
    /// Extract the handler-relevant fields of a message
    pub fn from_message(msg: &Message) -> Self {
        Self {
            chat_id: msg.chat.id,
            message_id: msg.id,
            sender: msg.from.as_ref().map(|user| user.id),
            reply_to: msg.reply_to_message().map(|reply| ReplyTarget {
                message_id: reply.id,
                author: reply.from.as_ref().map(|user| user.id),
            }),
        }
    }
}
