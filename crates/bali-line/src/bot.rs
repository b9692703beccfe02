//! LINE Bot implementation
//!
//! Wires configuration into the dispatcher, record store and reply client

use std::sync::Arc;

use axum::Router;
use bali_airtable::{AirtableClient, AirtableConfig, RecordStore};
use bali_core::{BotMode, Config};
use tracing::{info, warn};

use crate::api::LineApiClient;
use crate::catalog::CatalogBot;
use crate::content::ContentContext;
use crate::dispatcher::Dispatcher;
use crate::error::{LineError, Result};
use crate::property::{PropertyLookup, RenderOptions, UnconfiguredStore};
use crate::property_bot::PropertyBot;
use crate::responder::Responder;
use crate::rules::RuleTable;
use crate::webhook::{WebhookState, create_webhook_router};

/// LINE Bot for Bali property information
pub struct LineBot {
    state: WebhookState,
}

impl LineBot {
    /// Create a new LINE bot
    pub fn new(config: Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| LineError::Config(e.to_string()))?;

        let api_client = LineApiClient::new(&config.line.channel_access_token)?;
        let responder = build_responder(&config);

        let state = WebhookState {
            channel_secret: config.line.channel_secret.clone(),
            dispatcher: Arc::new(Dispatcher::new(responder)),
            sink: Arc::new(api_client),
        };

        info!("LINE bot initialized in {:?} mode", config.bot.mode);

        Ok(Self { state })
    }

    /// Webhook routes
    pub fn router(&self) -> Router {
        create_webhook_router(self.state.clone())
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.state.dispatcher)
    }
}

fn build_responder(config: &Config) -> Arc<dyn Responder> {
    match config.bot.mode {
        BotMode::Catalog => Arc::new(CatalogBot::new()),
        BotMode::Property => {
            let base_url = config.base_url();
            let content = ContentContext::new(base_url.as_str())
                .with_booking_form_url(config.content.booking_form_url.as_str())
                .with_asset_version(config.content.asset_version.clone());
            let render = RenderOptions {
                placeholder_image: config
                    .content
                    .placeholder_image
                    .clone()
                    .filter(|url| !url.is_empty())
                    .unwrap_or_else(|| content.image_url("no-image.jpg")),
            };
            let lookup = PropertyLookup::from_settings(build_store(config), &config.airtable);

            Arc::new(PropertyBot::new(
                Arc::new(RuleTable::standard()),
                Arc::new(content),
                Arc::new(lookup),
                render,
            ))
        }
    }
}

fn build_store(config: &Config) -> Arc<dyn RecordStore> {
    let settings = &config.airtable;
    if !settings.is_configured() {
        warn!("Airtable credentials not configured; property lookups will find nothing");
        return Arc::new(UnconfiguredStore);
    }

    let airtable = AirtableConfig::new(
        settings.api_key.clone().unwrap_or_default(),
        settings.base_id.clone().unwrap_or_default(),
    )
    .with_timeout_secs(settings.timeout_secs);
    match AirtableClient::new(airtable) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!("Failed to create Airtable client: {}", e);
            Arc::new(UnconfiguredStore)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, InboundEvent};

    fn config(mode: BotMode) -> Config {
        let mut config = Config::default();
        config.line.channel_secret = "secret".to_string();
        config.line.channel_access_token = "token".to_string();
        config.bot.mode = mode;
        config
    }

    #[test]
    fn test_missing_credentials_rejected() {
        assert!(LineBot::new(Config::default()).is_err());
    }

    #[tokio::test]
    async fn test_property_mode_answers_keywords() {
        let bot = LineBot::new(config(BotMode::Property)).unwrap();
        let event = InboundEvent::new(EventKind::Text {
            text: "会社概要".to_string(),
        });
        let reply = bot.dispatcher().dispatch(&event).await.unwrap();
        assert!(reply[0].as_flex().is_some());
    }

    #[tokio::test]
    async fn test_unconfigured_store_reports_not_found() {
        let bot = LineBot::new(config(BotMode::Property)).unwrap();
        let event = InboundEvent::new(EventKind::Postback {
            data: "area=kuta".to_string(),
        });
        let reply = bot.dispatcher().dispatch(&event).await.unwrap();
        assert_eq!(
            reply[0].as_text(),
            Some("Kutaエリアの物件が見つかりませんでした。別のエリアをお試しください。")
        );
    }

    #[tokio::test]
    async fn test_catalog_mode() {
        let bot = LineBot::new(config(BotMode::Catalog)).unwrap();
        let event = InboundEvent::new(EventKind::Text {
            text: "receipt".to_string(),
        });
        let reply = bot.dispatcher().dispatch(&event).await.unwrap();
        assert!(reply[0].as_flex().is_some());
    }
}
