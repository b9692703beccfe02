//! Inbound event classification
//!
//! Turns the loosely typed webhook `LineEvent` into the closed set of
//! cases the dispatcher understands.

use std::fmt;

use crate::types::LineEvent;

/// One-time capability to reply to a single event
///
/// Deliberately not `Clone`: sending a reply consumes it.
pub struct ReplyToken(String);

impl ReplyToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Consume the token for transmission
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ReplyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReplyToken(..)")
    }
}

/// What happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// User sent a text message
    Text { text: String },
    /// User tapped a button carrying `data`
    Postback { data: String },
    /// User added the bot
    Follow,
    /// User blocked the bot
    Unfollow,
    /// Non-text message (sticker, image, ...)
    UnsupportedMessage { message_type: String },
    /// Any other event type (join, leave, beacon, ...)
    Other { event_type: String },
}

/// A validated inbound event, consumed once by the dispatcher
#[derive(Debug)]
pub struct InboundEvent {
    pub reply_token: Option<ReplyToken>,
    pub source_user_id: Option<String>,
    pub kind: EventKind,
}

impl InboundEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            reply_token: None,
            source_user_id: None,
            kind,
        }
    }

    /// Classify a webhook event
    pub fn from_line_event(event: LineEvent) -> Self {
        let kind = match event.event_type.as_str() {
            "message" => match event.message {
                Some(msg) if msg.message_type == "text" => EventKind::Text {
                    text: msg.text.unwrap_or_default(),
                },
                Some(msg) => EventKind::UnsupportedMessage {
                    message_type: msg.message_type,
                },
                None => EventKind::UnsupportedMessage {
                    message_type: "unknown".to_string(),
                },
            },
            "postback" => match event.postback {
                Some(postback) => EventKind::Postback {
                    data: postback.data,
                },
                None => EventKind::Postback {
                    data: String::new(),
                },
            },
            "follow" => EventKind::Follow,
            "unfollow" => EventKind::Unfollow,
            _ => EventKind::Other {
                event_type: event.event_type,
            },
        };

        Self {
            reply_token: event.reply_token.filter(|t| !t.is_empty()).map(ReplyToken::new),
            source_user_id: event.source.user_id,
            kind,
        }
    }

    /// Short label for logs
    pub fn kind_name(&self) -> &str {
        match &self.kind {
            EventKind::Text { .. } => "text",
            EventKind::Postback { .. } => "postback",
            EventKind::Follow => "follow",
            EventKind::Unfollow => "unfollow",
            EventKind::UnsupportedMessage { .. } => "message",
            EventKind::Other { event_type } => event_type,
        }
    }
}
