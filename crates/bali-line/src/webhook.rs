//! Webhook endpoint for LINE Bot
//!
//! Verifies the signature, then answers every event of the batch in its
//! own task. The request completes once all tasks have finished.

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::api::ReplySink;
use crate::dispatcher::Dispatcher;
use crate::event::InboundEvent;
use crate::types::WebhookBody;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Webhook server state
#[derive(Clone)]
pub struct WebhookState {
    pub channel_secret: String,
    pub dispatcher: Arc<Dispatcher>,
    pub sink: Arc<dyn ReplySink>,
}

/// Create webhook router
pub fn create_webhook_router(state: WebhookState) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .with_state(Arc::new(state))
}

/// Handle incoming webhook
async fn handle_webhook(
    State(state): State<Arc<WebhookState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, StatusCode> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing x-line-signature header");
            StatusCode::BAD_REQUEST
        })?;

    if !verify_signature(&state.channel_secret, &body, signature) {
        warn!("Invalid signature");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let webhook: WebhookBody = serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to parse webhook body: {:?}", e);
        StatusCode::BAD_REQUEST
    })?;

    debug!(
        "Received {} event(s) for destination: {}",
        webhook.events.len(),
        webhook.destination
    );

    let mut tasks = JoinSet::new();
    for event in webhook.events {
        let state = Arc::clone(&state);
        tasks.spawn(async move { handle_event(&state, InboundEvent::from_line_event(event)).await });
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            error!("Event task failed: {}", e);
        }
    }

    Ok(StatusCode::OK)
}

/// Dispatch one event and send its reply
async fn handle_event(state: &WebhookState, mut event: InboundEvent) {
    let Some(reply) = state.dispatcher.dispatch(&event).await else {
        return;
    };

    let Some(token) = event.reply_token.take() else {
        debug!("No reply token on {} event; dropping reply", event.kind_name());
        return;
    };

    if let Err(e) = state.sink.reply(token, reply).await {
        error!("Failed to send reply for {} event: {}", event.kind_name(), e);
    }
}

/// Verify LINE signature
///
/// `signature` is the base64 HMAC-SHA256 of the raw body keyed with the
/// channel secret.
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(channel_secret.as_bytes()) else {
        return false;
    };

    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}
