//! Event router
//!
//! Maps each [`InboundEvent`] variant to its handler, sends notices back to
//! the chat and hands every error to the error handler. Nothing here keeps
//! state between events besides the immutable denylist.

use tracing::{debug, warn};
use crate::handlers::{commands, error, messages, NoticeKind, Outcome};
use crate::models::{Denylist, InboundEvent};
use crate::services::ChatPlatform;
use crate::utils::errors::Result;

/// Routes decoded events to handlers
pub struct Router<P> {
    platform: P,
    denylist: Denylist,
}

impl<P> Router<P>
where
    P: ChatPlatform,
{
    pub fn new(platform: P, denylist: Denylist) -> Self {
        Self { platform, denylist }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Run the handler for `event` without any error handling
    pub async fn route(&self, event: &InboundEvent) -> Result<Outcome> {
        match event {
            InboundEvent::Command { context, command } => {
                commands::handle_command(&self.platform, context, *command).await
            }
            InboundEvent::MembersJoined { context, members } => {
                messages::handle_new_chat_members(&self.platform, context, members).await
            }
            InboundEvent::Text { context, text } => {
                messages::handle_text(&self.platform, context, text, &self.denylist).await
            }
        }
    }

    /// Handle one event end to end.
    ///
    /// Notices are delivered to the originating chat. Errors, including a
    /// failed notice delivery, are logged by the error handler and
    /// swallowed so the dispatch loop keeps going.
    pub async fn dispatch(&self, event: &InboundEvent) {
        if let Err(e) = self.run(event).await {
            error::log_handler_error(event, &e);
        }
    }

    async fn run(&self, event: &InboundEvent) -> Result<()> {
        match self.route(event).await? {
            Outcome::Done => {
                debug!(kind = event.kind(), "Event handled");
            }
            Outcome::Notice(notice) => {
                let context = event.context();
                match notice.kind {
                    NoticeKind::Guidance | NoticeKind::Denied => {
                        debug!(kind = event.kind(), notice = ?notice.kind, "Replying with notice");
                    }
                    NoticeKind::ModerationFailed => {
                        warn!(kind = event.kind(), text = %notice.text, "Replying with moderation failure");
                    }
                }
                self.platform
                    .send_text(context.chat_id, &notice.text, Some(context.message_id))
                    .await?;
            }
        }
        Ok(())
    }
}
