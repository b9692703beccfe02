//! LINE Messaging API client
//!
//! Sends replies through the LINE Messaging API

use std::time::Duration;

use async_trait::async_trait;
use bali_flex::Message;
use reqwest::Client;
use tracing::{debug, error};

use crate::error::{LineError, Result};
use crate::event::ReplyToken;
use crate::types::{LineApiResponse, ReplyRequest};

/// LINE accepts at most this many messages per reply
pub const MAX_REPLY_MESSAGES: usize = 5;

/// Destination for replies
///
/// The token is consumed, so each event can be answered once.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn reply(&self, token: ReplyToken, messages: Vec<Message>) -> Result<()>;
}

/// LINE Messaging API client
#[derive(Clone)]
pub struct LineApiClient {
    client: Client,
    channel_access_token: String,
    base_url: String,
}

impl LineApiClient {
    /// Create a new LINE API client
    pub fn new(channel_access_token: &str) -> Result<Self> {
        Self::with_base_url(channel_access_token, "https://api.line.me/v2")
    }

    /// Create a client against a custom API root
    pub fn with_base_url(channel_access_token: &str, base_url: &str) -> Result<Self> {
        if channel_access_token.is_empty() {
            return Err(LineError::Config(
                "Channel access token not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(LineError::HttpError)?;

        Ok(Self {
            client,
            channel_access_token: channel_access_token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Add authorization header
    fn add_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(&self.channel_access_token)
    }

    /// Reply to an event
    pub async fn reply_message(&self, reply_token: &str, messages: &[Message]) -> Result<()> {
        if messages.is_empty() {
            return Ok(());
        }
        if messages.len() > MAX_REPLY_MESSAGES {
            return Err(LineError::ApiError(format!(
                "Reply carries {} messages, limit is {}",
                messages.len(),
                MAX_REPLY_MESSAGES
            )));
        }

        let url = format!("{}/bot/message/reply", self.base_url);
        let body = ReplyRequest {
            reply_token,
            messages,
        };

        debug!("Replying with {} message(s)", messages.len());

        let response = self
            .add_auth(self.client.post(&url).json(&body))
            .send()
            .await
            .map_err(LineError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<LineApiResponse>(&error_text)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(error_text);
            error!("Reply message failed: {} - {}", status, detail);
            return Err(LineError::ApiError(format!("{}: {}", status, detail)));
        }

        Ok(())
    }
}

#[async_trait]
impl ReplySink for LineApiClient {
    async fn reply(&self, token: ReplyToken, messages: Vec<Message>) -> Result<()> {
        self.reply_message(&token.into_inner(), &messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_api_client_creation() {
        assert!(LineApiClient::new("test-token").is_ok());
        assert!(LineApiClient::new("").is_err());
    }

    #[tokio::test]
    async fn test_reply_posts_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot/message/reply"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({
                "replyToken": "token-1",
                "messages": [{"type": "text", "text": "hello"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = LineApiClient::with_base_url("test-token", &server.uri()).unwrap();
        client
            .reply(ReplyToken::new("token-1"), vec![Message::text("hello")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reply_surfaces_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid reply token"})),
            )
            .mount(&server)
            .await;

        let client = LineApiClient::with_base_url("test-token", &server.uri()).unwrap();
        let err = client
            .reply_message("expired", &[Message::text("hi")])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid reply token"));
    }

    #[tokio::test]
    async fn test_reply_rejects_oversized_batch() {
        let client = LineApiClient::new("test-token").unwrap();
        let messages = vec![Message::text("x"); MAX_REPLY_MESSAGES + 1];
        assert!(client.reply_message("token", &messages).await.is_err());
    }
}
