//! Record store abstraction

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FieldFilter, Record};

/// Read-only tabular store
///
/// Implementations return at most `max_records` rows in store order.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch rows from `table`, optionally filtered by one equality predicate
    async fn query(
        &self,
        table: &str,
        filter: Option<&FieldFilter>,
        max_records: usize,
    ) -> Result<Vec<Record>>;
}
