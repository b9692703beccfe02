//! Error types for bali-airtable

use thiserror::Error;

/// Airtable error types that mean "this table is not visible to us"
const MODEL_NOT_FOUND: &str = "INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND";

/// bali-airtable error type
#[derive(Error, Debug)]
pub enum AirtableError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authorization failed ({status} {kind}): {message}")]
    Unauthorized {
        status: u16,
        kind: String,
        message: String,
    },

    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("Airtable API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl AirtableError {
    /// The credentials were rejected or lack permission
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The table does not exist (or is indistinguishable from a missing one)
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Unauthorized { kind, .. } => kind == MODEL_NOT_FOUND,
            _ => false,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AirtableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let auth = AirtableError::Unauthorized {
            status: 401,
            kind: "AUTHENTICATION_REQUIRED".to_string(),
            message: "missing token".to_string(),
        };
        assert!(auth.is_authorization());
        assert!(!auth.is_not_found());

        let hidden = AirtableError::Unauthorized {
            status: 403,
            kind: MODEL_NOT_FOUND.to_string(),
            message: String::new(),
        };
        assert!(hidden.is_authorization());
        assert!(hidden.is_not_found());

        let missing = AirtableError::NotFound("Properties".to_string());
        assert!(missing.is_not_found());
        assert!(!missing.is_authorization());

        let api = AirtableError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!api.is_authorization());
        assert!(!api.is_not_found());
    }
}
