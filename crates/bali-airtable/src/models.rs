//! Data models for the Airtable integration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Airtable configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirtableConfig {
    /// Personal access token or legacy API key
    pub api_key: String,
    /// Base ID (`app...`)
    pub base_id: String,
    /// API root, overridable for tests
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.airtable.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl AirtableConfig {
    /// Create a new Airtable config
    pub fn new(api_key: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_id: base_id.into(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Override the API root URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Equality predicate on a single column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

impl FieldFilter {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Render as an Airtable formula, e.g. `{area} = 'Kuta'`
    pub fn to_formula(&self) -> String {
        let escaped = self.value.replace('\\', "\\\\").replace('\'', "\\'");
        format!("{{{}}} = '{}'", self.field, escaped)
    }
}

/// A single table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "createdTime", default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Build a record from field pairs
    pub fn from_fields<I, K>(id: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            id: id.into(),
            created_time: None,
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Raw cell value
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// `GET /v0/{base}/{table}` response page
#[derive(Debug, Deserialize)]
pub(crate) struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// Airtable error body; `error` is either an object or a bare code string
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorBody {
    Detailed {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        message: Option<String>,
    },
    Code(String),
}

impl ErrorBody {
    pub fn kind(&self) -> &str {
        match self {
            Self::Detailed { kind, .. } => kind,
            Self::Code(code) => code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Detailed { message, .. } => message.as_deref().unwrap_or_default(),
            Self::Code(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_formula() {
        assert_eq!(FieldFilter::equals("area", "Kuta").to_formula(), "{area} = 'Kuta'");
        assert_eq!(
            FieldFilter::equals("area", "Nusa Dua").to_formula(),
            "{area} = 'Nusa Dua'"
        );
    }

    #[test]
    fn test_filter_formula_escapes_quotes() {
        assert_eq!(
            FieldFilter::equals("Name", "O'Neil \\ co").to_formula(),
            "{Name} = 'O\\'Neil \\\\ co'"
        );
    }

    #[test]
    fn test_record_parsing() {
        let record: Record = serde_json::from_value(json!({
            "id": "rec1",
            "createdTime": "2024-01-01T00:00:00.000Z",
            "fields": {"Name": "Villa", "Number of rooms": 3}
        }))
        .unwrap();

        assert_eq!(record.id, "rec1");
        assert_eq!(record.field("Name"), Some(&json!("Villa")));
        assert_eq!(record.field("Number of rooms"), Some(&json!(3)));
        assert!(record.field("Missing").is_none());
    }

    #[test]
    fn test_error_body_shapes() {
        let detailed: ErrorResponse = serde_json::from_value(json!({
            "error": {"type": "AUTHENTICATION_REQUIRED", "message": "no token"}
        }))
        .unwrap();
        assert_eq!(detailed.error.kind(), "AUTHENTICATION_REQUIRED");
        assert_eq!(detailed.error.message(), "no token");

        let code: ErrorResponse = serde_json::from_value(json!({"error": "NOT_FOUND"})).unwrap();
        assert_eq!(code.error.kind(), "NOT_FOUND");
        assert_eq!(code.error.message(), "");
    }
}
