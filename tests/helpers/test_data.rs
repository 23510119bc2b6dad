//! Test data builders
//!
//! Handler tests work on decoded [`MessageContext`] values directly. The
//! decoding tests need real teloxide messages, which are built from Bot API
//! JSON the same way teloxide itself receives them.

use serde_json::{json, Value};
use teloxide::types::{ChatId, Message, MessageId, UserId};
use GroupKeeper::models::{MessageContext, NewMember, ReplyTarget};

pub const TEST_CHAT_ID: i64 = -1001234567890;
pub const ADMIN_ID: u64 = 111;
pub const MEMBER_ID: u64 = 222;
pub const TARGET_ID: u64 = 333;
pub const BOT_USERNAME: &str = "group_keeper_bot";

pub fn chat_id() -> ChatId {
    ChatId(TEST_CHAT_ID)
}

/// Context of a message sent by `sender`, not replying to anything
pub fn plain_context(sender: u64) -> MessageContext {
    MessageContext {
        chat_id: chat_id(),
        message_id: MessageId(10),
        sender: Some(UserId(sender)),
        reply_to: None,
    }
}

/// Context of a message sent by `sender` in reply to one by `target`
pub fn reply_context(sender: u64, target: u64) -> MessageContext {
    MessageContext {
        reply_to: Some(ReplyTarget {
            message_id: MessageId(9),
            author: Some(UserId(target)),
        }),
        ..plain_context(sender)
    }
}

pub fn new_member(id: u64, name: &str) -> NewMember {
    NewMember {
        user_id: UserId(id),
        display_name: name.to_string(),
    }
}

/// Bot API user object
pub fn user_json(id: u64, first_name: &str, last_name: Option<&str>) -> Value {
    let mut user = json!({
        "id": id,
        "is_bot": false,
        "first_name": first_name,
    });
    if let Some(last_name) = last_name {
        user["last_name"] = json!(last_name);
    }
    user
}

fn base_message_json(message_id: i32, from: u64) -> Value {
    json!({
        "message_id": message_id,
        "date": 1640995200,
        "chat": {
            "id": TEST_CHAT_ID,
            "title": "Test Group",
            "type": "supergroup"
        },
        "from": user_json(from, "Test", None),
    })
}

/// Length in UTF-16 units of a leading `/name` or `/name@bot`, the only
/// shape Telegram tags with a `bot_command` entity
fn leading_command_len(text: &str) -> Option<usize> {
    let head = text.split_whitespace().next()?;
    let body = head.strip_prefix('/')?;
    let (name, bot) = match body.split_once('@') {
        Some((name, bot)) => (name, Some(bot)),
        None => (body, None),
    };
    let word = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !word(name) || bot.is_some_and(|b| !word(b)) {
        return None;
    }
    Some(head.encode_utf16().count())
}

/// Bot API text message; commands get a `bot_command` entity like Telegram sends
pub fn text_message_json(message_id: i32, from: u64, text: &str) -> Value {
    let mut message = untagged_text_message_json(message_id, from, text);
    if let Some(length) = leading_command_len(text) {
        message["entities"] = json!([{ "type": "bot_command", "offset": 0, "length": length }]);
    }
    message
}

/// Bot API text message with no entities at all
pub fn untagged_text_message_json(message_id: i32, from: u64, text: &str) -> Value {
    let mut message = base_message_json(message_id, from);
    message["text"] = json!(text);
    message
}

pub fn text_message(from: u64, text: &str) -> Message {
    serde_json::from_value(text_message_json(10, from, text)).expect("valid text message")
}

/// A text message Telegram did not mark as a command, whatever it starts with
pub fn untagged_text_message(from: u64, text: &str) -> Message {
    serde_json::from_value(untagged_text_message_json(10, from, text)).expect("valid text message")
}

/// A command message replying to a message from `target`
pub fn reply_message(from: u64, text: &str, target: u64) -> Message {
    let mut message = text_message_json(10, from, text);
    message["reply_to_message"] = text_message_json(9, target, "hello");
    serde_json::from_value(message).expect("valid reply message")
}

/// A join service message listing `members` as (id, first name, last name)
pub fn join_message(members: &[(u64, &str, Option<&str>)]) -> Message {
    let mut message = base_message_json(11, members.first().map(|m| m.0).unwrap_or(1));
    message["new_chat_members"] = Value::Array(
        members
            .iter()
            .map(|(id, first, last)| user_json(*id, first, *last))
            .collect(),
    );
    serde_json::from_value(message).expect("valid join message")
}

/// A photo message without caption
pub fn photo_message(from: u64) -> Message {
    let mut message = base_message_json(12, from);
    message["photo"] = json!([{
        "file_id": "photo-file-id",
        "file_unique_id": "photo-unique-id",
        "width": 90,
        "height": 90,
        "file_size": 1024
    }]);
    serde_json::from_value(message).expect("valid photo message")
}
