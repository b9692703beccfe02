//! LINE Messaging API types

use bali_flex::Message;
use serde::{Deserialize, Serialize};

/// LINE message object inside a message event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// LINE source (user, group, or room)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSource {
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
}

/// Postback payload attached to a button tap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinePostback {
    pub data: String,
}

/// LINE webhook event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(rename = "replyToken", default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub source: LineSource,
    #[serde(default)]
    pub message: Option<LineMessage>,
    #[serde(default)]
    pub postback: Option<LinePostback>,
}

/// Webhook request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookBody {
    #[serde(default)]
    pub destination: String,
    pub events: Vec<LineEvent>,
}

/// Reply API request
#[derive(Debug, Clone, Serialize)]
pub struct ReplyRequest<'a> {
    #[serde(rename = "replyToken")]
    pub reply_token: &'a str,
    pub messages: &'a [Message],
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineApiResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<Vec<ErrorDetail>>,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub property: Option<String>,
}
