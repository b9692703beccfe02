//! 物件検索
//!
//! エリアコードを `area` 列の値に変換し、レコードストアの各テーブルを
//! 順に検索します。失敗した場合はエラーを返さず空の結果を返し、
//! 呼び出し側は「見つかりませんでした」のテキストを表示します。

pub mod areas;
pub mod demo;
pub mod record;
pub mod render;

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use bali_airtable::{AirtableError, FieldFilter, Record, RecordStore};
use bali_core::AirtableSettings;
use tracing::{debug, error, info, warn};

pub use areas::area_label;
pub use record::PropertyRecord;
pub use render::{RenderOptions, create_property_detail_message, property_bubble};

/// Column holding the area label
pub const AREA_FIELD: &str = "area";

/// Where the records of a lookup came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Remote,
    /// Sample data substituted after an authorization failure
    Demo,
}

/// Result of a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub area_label: String,
    pub records: Vec<PropertyRecord>,
    pub source: RecordSource,
}

impl Lookup {
    pub fn empty(area_label: impl Into<String>) -> Self {
        Self {
            area_label: area_label.into(),
            records: Vec::new(),
            source: RecordSource::Remote,
        }
    }
}

/// Listings for an area
///
/// Never fails: errors are logged and reported as an empty lookup.
#[async_trait]
pub trait PropertySource: Send + Sync {
    async fn lookup(&self, area_code: &str) -> Lookup;
}

/// Store used when Airtable credentials are missing
pub struct UnconfiguredStore;

#[async_trait]
impl RecordStore for UnconfiguredStore {
    async fn query(
        &self,
        _table: &str,
        _filter: Option<&FieldFilter>,
        _max_records: usize,
    ) -> bali_airtable::Result<Vec<Record>> {
        Err(AirtableError::Configuration(
            "Airtable API key or base ID not configured".to_string(),
        ))
    }
}

/// Lookup over a record store, trying each table in order
pub struct PropertyLookup {
    store: Arc<dyn RecordStore>,
    tables: Vec<String>,
    max_records: usize,
    diagnostics: bool,
    demo_fallback: bool,
}

impl PropertyLookup {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            tables: vec!["Properties".to_string(), "Table 1".to_string()],
            max_records: 10,
            diagnostics: false,
            demo_fallback: false,
        }
    }

    pub fn from_settings(store: Arc<dyn RecordStore>, settings: &AirtableSettings) -> Self {
        Self::new(store)
            .with_tables(settings.tables.clone())
            .with_max_records(settings.max_records)
            .with_diagnostics(settings.diagnostics)
            .with_demo_fallback(settings.demo_fallback)
    }

    pub fn with_tables(mut self, tables: Vec<String>) -> Self {
        if !tables.is_empty() {
            self.tables = tables;
        }
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records.max(1);
        self
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn with_demo_fallback(mut self, enabled: bool) -> Self {
        self.demo_fallback = enabled;
        self
    }

    /// Rows of the first table that has any for `label`
    async fn query_tables(&self, label: &str) -> bali_airtable::Result<Vec<Record>> {
        let filter = FieldFilter::equals(AREA_FIELD, label);
        // A 403 that may mean "no access" rather than "no such table"
        let mut denied = None;

        for table in &self.tables {
            match self.store.query(table, Some(&filter), self.max_records).await {
                Ok(records) if !records.is_empty() => {
                    debug!("Found {} record(s) for '{}' in '{}'", records.len(), label, table);
                    return Ok(records);
                }
                Ok(_) => debug!("No records for '{}' in '{}'", label, table),
                Err(e) if e.is_not_found() => {
                    warn!("Table '{}' not found, trying next", table);
                    if e.is_authorization() {
                        denied = Some(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        denied.map_or(Ok(Vec::new()), Err)
    }

    /// Log which `area` values the first table actually holds
    async fn log_observed_areas(&self, label: &str) {
        let Some(table) = self.tables.first() else {
            return;
        };

        match self.store.query(table, None, self.max_records).await {
            Ok(records) => {
                let observed: BTreeSet<String> = records
                    .iter()
                    .filter_map(|r| r.field(AREA_FIELD))
                    .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                    .collect();
                info!(
                    "No match for area '{}'; '{}' holds area values {:?}",
                    label, table, observed
                );
            }
            Err(e) => warn!("Diagnostics query on '{}' failed: {}", table, e),
        }
    }
}

#[async_trait]
impl PropertySource for PropertyLookup {
    async fn lookup(&self, area_code: &str) -> Lookup {
        let label = area_label(area_code).to_string();

        match self.query_tables(&label).await {
            Ok(records) if !records.is_empty() => Lookup {
                records: records.iter().map(PropertyRecord::from_record).collect(),
                area_label: label,
                source: RecordSource::Remote,
            },
            Ok(_) => {
                if self.diagnostics {
                    self.log_observed_areas(&label).await;
                }
                Lookup::empty(label)
            }
            Err(e) if e.is_authorization() && self.demo_fallback => {
                warn!("Record store rejected credentials ({}); showing sample listings", e);
                Lookup {
                    records: demo::demo_records(&label),
                    area_label: label,
                    source: RecordSource::Demo,
                }
            }
            Err(e) => {
                error!("Property lookup for '{}' failed: {}", label, e);
                Lookup::empty(label)
            }
        }
    }
}
