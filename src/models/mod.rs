//! Data models module
//!
//! This module contains the transient values handlers work with: decoded
//! inbound events, membership roles and the filter denylist.

pub mod denylist;
pub mod event;
pub mod member;

pub use denylist::Denylist;
pub use event::{InboundEvent, MessageContext, NewMember, ReplyTarget};
pub use member::MemberRole;
