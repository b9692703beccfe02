//! Airtable REST client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, error, info};

use crate::error::{AirtableError, Result};
use crate::models::{AirtableConfig, ErrorResponse, FieldFilter, ListRecordsResponse, Record};
use crate::store::RecordStore;

/// Airtable caps a single page at this many rows
const MAX_PAGE_SIZE: usize = 100;

/// Airtable client for record listing
#[derive(Clone)]
pub struct AirtableClient {
    client: Client,
    config: AirtableConfig,
    base_url: Url,
}

impl AirtableClient {
    /// Create a new Airtable client
    pub fn new(config: AirtableConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(AirtableError::Configuration("API key not configured".to_string()));
        }
        if config.base_id.is_empty() {
            return Err(AirtableError::Configuration("Base ID not configured".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AirtableError::Configuration(e.to_string()))?;

        let root = config.api_url.trim_end_matches('/');
        let base_url = Url::parse(&format!("{}/v0/{}/", root, config.base_id))
            .map_err(|e| AirtableError::Configuration(format!("Invalid API URL: {}", e)))?;

        info!("Airtable client initialized for base: {}", config.base_id);

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// URL of a table's records endpoint; the table name is percent-encoded
    fn table_url(&self, table: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AirtableError::Configuration("API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(table);
        Ok(url)
    }

    /// Fetch one page of records
    async fn list_page(
        &self,
        table: &str,
        filter: Option<&FieldFilter>,
        max_records: usize,
        offset: Option<&str>,
    ) -> Result<ListRecordsResponse> {
        let url = self.table_url(table)?;

        let mut params: Vec<(&str, String)> = vec![
            ("maxRecords", max_records.to_string()),
            ("pageSize", max_records.min(MAX_PAGE_SIZE).to_string()),
        ];
        if let Some(filter) = filter {
            params.push(("filterByFormula", filter.to_formula()));
        }
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }

        debug!("Querying Airtable table '{}' with {:?}", table, params);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.api_key)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Airtable request failed: {} - {}", status, error_text);
            return Err(classify_error(status, table, &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| AirtableError::ParseError(e.to_string()))
    }
}

/// Map a non-success response onto a typed error
fn classify_error(status: StatusCode, table: &str, body: &str) -> AirtableError {
    let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
    let kind = parsed
        .as_ref()
        .map(|r| r.error.kind().to_string())
        .unwrap_or_default();
    let message = parsed
        .as_ref()
        .map(|r| r.error.message().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AirtableError::Unauthorized {
            status: status.as_u16(),
            kind,
            message,
        },
        StatusCode::NOT_FOUND => AirtableError::NotFound(table.to_string()),
        _ => match kind.as_str() {
            "AUTHENTICATION_REQUIRED" | "NOT_AUTHORIZED" | "INVALID_PERMISSIONS" => {
                AirtableError::Unauthorized {
                    status: status.as_u16(),
                    kind,
                    message,
                }
            }
            "TABLE_NOT_FOUND" | "NOT_FOUND" => AirtableError::NotFound(table.to_string()),
            _ => AirtableError::Api {
                status: status.as_u16(),
                message,
            },
        },
    }
}

#[async_trait]
impl RecordStore for AirtableClient {
    async fn query(
        &self,
        table: &str,
        filter: Option<&FieldFilter>,
        max_records: usize,
    ) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        while records.len() < max_records {
            let remaining = max_records - records.len();
            let page = self
                .list_page(table, filter, remaining, offset.as_deref())
                .await?;

            records.extend(page.records);
            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        records.truncate(max_records);
        info!("Fetched {} records from '{}'", records.len(), table);
        Ok(records)
    }
}
