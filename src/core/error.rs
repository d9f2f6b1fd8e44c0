//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages for
//! every backend interaction. One taxonomy covers the whole API surface:
//!
//! - [`ApiError::Transport`] / [`ApiError::Timeout`] - the request never completed
//! - [`ApiError::Server`] - non-2xx response with a body
//! - [`ApiError::NotFound`] - operating on an unknown or already-deleted id
//! - [`ApiError::Validation`] - field-level rejection of an upload payload
//! - [`ApiError::Malformed`] - a response body missing an expected shape

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Field-level validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors returned by the API client.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Browser window not available
    NoWindow,
    /// Failed to create the HTTP request or its payload
    RequestCreationFailed,
    /// Network request failed (DNS, CORS, connection reset, ...)
    Transport(String),
    /// Request timed out before the server answered
    Timeout,
    /// HTTP error response (non-2xx status) with its body
    Server { status: u16, body: String },
    /// The addressed document does not (or no longer does) exist
    NotFound,
    /// The backend rejected the payload with field-level detail
    Validation(FieldErrors),
    /// Response arrived but could not be interpreted
    Malformed(String),
}

/// Wire shape of a field-validation rejection body.
#[derive(Deserialize)]
struct ValidationBody {
    errors: FieldErrors,
}

impl ApiError {
    /// Map a non-2xx response to an error variant.
    ///
    /// 404 is always [`ApiError::NotFound`]. 400/422 bodies are probed for
    /// the `{"errors": {field: [messages]}}` shape the upload endpoint
    /// produces; anything else stays a plain [`ApiError::Server`].
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            404 => Self::NotFound,
            400 | 422 => match serde_json::from_str::<ValidationBody>(&body) {
                Ok(parsed) if !parsed.errors.is_empty() => Self::Validation(parsed.errors),
                _ => Self::Server { status, body },
            },
            _ => Self::Server { status, body },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::Transport(msg) => write!(f, "Network error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Server { status, .. } => write!(f, "Server error: HTTP {}", status),
            Self::NotFound => write!(f, "Document not found"),
            Self::Validation(fields) => {
                write!(f, "Rejected by server:")?;
                for (field, messages) in fields {
                    write!(f, " {}: {};", field, messages.join(", "))?;
                }
                Ok(())
            }
            Self::Malformed(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        assert!(matches!(
            ApiError::from_status(404, String::new()),
            ApiError::NotFound
        ));
    }

    #[test]
    fn status_400_with_field_errors_maps_to_validation() {
        let body = r#"{"errors": {"FileType": ["Unsupported file type"]}}"#;
        match ApiError::from_status(400, body.to_string()) {
            ApiError::Validation(fields) => {
                assert_eq!(fields["FileType"], vec!["Unsupported file type"]);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn status_400_without_field_errors_stays_server() {
        assert!(matches!(
            ApiError::from_status(400, "nope".to_string()),
            ApiError::Server { status: 400, .. }
        ));
        assert!(matches!(
            ApiError::from_status(422, r#"{"errors": {}}"#.to_string()),
            ApiError::Server { status: 422, .. }
        ));
    }

    #[test]
    fn other_statuses_stay_server() {
        assert!(matches!(
            ApiError::from_status(500, "boom".to_string()),
            ApiError::Server { status: 500, .. }
        ));
    }

    #[test]
    fn validation_display_lists_fields() {
        let mut fields = FieldErrors::new();
        fields.insert("Name".to_string(), vec!["required".to_string()]);
        let rendered = ApiError::Validation(fields).to_string();
        assert!(rendered.contains("Name: required"));
    }
}
