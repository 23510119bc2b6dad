//! Chat membership role

use teloxide::types::{ChatMember, ChatMemberStatus};

/// Role of a user in a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Member,
    Administrator,
    Creator,
    /// Restricted, left or banned
    Other,
}

impl MemberRole {
    /// Whether the role may run moderation commands
    pub fn is_admin(self) -> bool {
        matches!(self, MemberRole::Administrator | MemberRole::Creator)
    }
}

impl From<ChatMemberStatus> for MemberRole {
    fn from(status: ChatMemberStatus) -> Self {
        match status {
            ChatMemberStatus::Owner => MemberRole::Creator,
            ChatMemberStatus::Administrator => MemberRole::Administrator,
            ChatMemberStatus::Member => MemberRole::Member,
            _ => MemberRole::Other,
        }
    }
}

impl From<&ChatMember> for MemberRole {
    fn from(member: &ChatMember) -> Self {
        member.kind.status().into()
    }
}
