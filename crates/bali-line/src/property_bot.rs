//! 不動産案内ボット (default mode)

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::content::ContentContext;
use crate::error::Result;
use crate::property::{PropertySource, RenderOptions, create_property_detail_message};
use crate::responder::{Reply, Responder, could_not_process, echo};
use crate::rules::RuleTable;

/// Postback key that requests a property lookup
pub const AREA_KEY: &str = "area";

/// Keyword rules plus area lookups
pub struct PropertyBot {
    rules: Arc<RuleTable>,
    content: Arc<ContentContext>,
    properties: Arc<dyn PropertySource>,
    render: RenderOptions,
}

impl PropertyBot {
    pub fn new(
        rules: Arc<RuleTable>,
        content: Arc<ContentContext>,
        properties: Arc<dyn PropertySource>,
        render: RenderOptions,
    ) -> Self {
        Self {
            rules,
            content,
            properties,
            render,
        }
    }

    async fn area_reply(&self, area_code: &str) -> Result<Reply> {
        let lookup = self.properties.lookup(area_code).await;
        debug!(
            "Lookup for '{}' returned {} record(s)",
            lookup.area_label,
            lookup.records.len()
        );
        Ok(vec![create_property_detail_message(&lookup, &self.render)?])
    }
}

#[async_trait]
impl Responder for PropertyBot {
    async fn on_text(&self, text: &str) -> Result<Reply> {
        match self.rules.match_text(text) {
            Some(rule) => {
                debug!("Text matched rule '{}'", rule.name);
                Ok(vec![(rule.produce)(&self.content)?])
            }
            None => Ok(echo(text)),
        }
    }

    async fn on_postback(&self, data: &str) -> Result<Reply> {
        if let Some(rule) = self.rules.match_action(data) {
            debug!("Postback matched rule '{}'", rule.name);
            return Ok(vec![(rule.produce)(&self.content)?]);
        }

        let mut parts = data.split('=');
        match (parts.next(), parts.next()) {
            (Some(AREA_KEY), Some(code)) if !code.is_empty() => self.area_reply(code).await,
            _ => Ok(could_not_process()),
        }
    }
}
