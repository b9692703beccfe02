//! Event dispatcher
//!
//! Routes one inbound event to the responder. A failing or panicking
//! responder yields the generic failure text instead of an error.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use bali_flex::Message;
use futures::FutureExt;
use tracing::{debug, error, info};

use crate::api::MAX_REPLY_MESSAGES;
use crate::event::{EventKind, InboundEvent};
use crate::responder::{FAILURE, Reply, Responder, could_not_process};

#[derive(Clone)]
pub struct Dispatcher {
    responder: Arc<dyn Responder>,
}

impl Dispatcher {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self { responder }
    }

    /// Reply for `event`, or `None` when the event gets no answer
    pub async fn dispatch(&self, event: &InboundEvent) -> Option<Reply> {
        let outcome = match &event.kind {
            EventKind::Text { text } => {
                AssertUnwindSafe(self.responder.on_text(text))
                    .catch_unwind()
                    .await
            }
            EventKind::Postback { data } => {
                AssertUnwindSafe(self.responder.on_postback(data))
                    .catch_unwind()
                    .await
            }
            EventKind::Follow => {
                info!("Followed by {:?}", event.source_user_id);
                return Some(self.responder.welcome());
            }
            EventKind::Unfollow => {
                info!("Unfollowed by {:?}", event.source_user_id);
                return None;
            }
            EventKind::UnsupportedMessage { message_type } => {
                debug!("Unsupported message type: {}", message_type);
                return Some(could_not_process());
            }
            EventKind::Other { event_type } => {
                debug!("Ignoring event type: {}", event_type);
                return None;
            }
        };

        let mut reply = match outcome {
            Ok(Ok(reply)) if !reply.is_empty() => reply,
            Ok(Ok(_)) => return None,
            Ok(Err(e)) => {
                error!("Failed to build {} reply: {}", event.kind_name(), e);
                vec![Message::text(FAILURE)]
            }
            Err(_) => {
                error!("Responder panicked on {} event", event.kind_name());
                vec![Message::text(FAILURE)]
            }
        };

        reply.truncate(MAX_REPLY_MESSAGES);
        Some(reply)
    }
}
