//! HTTP server
//!
//! Webhook, health check, banner and static images on one axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use bali_core::Config;
use bali_line::LineBot;
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub environment: String,
}

/// Root endpoint
pub async fn root() -> &'static str {
    "LINE Bot is running!"
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        environment: state.environment.to_string(),
    })
}

/// Build the full application router
pub fn app(bot: &LineBot, config: &Config) -> Router {
    let state = AppState {
        environment: Arc::from(config.server.environment.as_str()),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
        .merge(bot.router())
        .nest_service("/images", ServeDir::new(&config.server.public_dir))
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` on `port` until `shutdown` resolves
pub async fn serve<F>(app: Router, port: u16, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    info!("Webhook URL: http://{}/webhook", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let mut config = Config::default();
        config.line.channel_secret = "secret".to_string();
        config.line.channel_access_token = "token".to_string();
        config.server.environment = "test".to_string();
        config.server.public_dir = "does-not-exist".to_string();

        let bot = LineBot::new(config.clone()).unwrap();
        app(&bot, &config)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_root_banner() {
        let (status, body) = fetch(test_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"LINE Bot is running!");
    }

    #[tokio::test]
    async fn test_health_reports_environment() {
        let (status, body) = fetch(test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["environment"], "test");
        assert!(json["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_missing_image_is_not_found() {
        let (status, _) = fetch(test_app(), "/images/missing.jpg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_webhook_is_mounted() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        // no signature header
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
