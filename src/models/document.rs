//! Document records as issued by the backend.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::config::API_BASE_URL;
use crate::models::FileKind;

// =============================================================================
// Document Id
// =============================================================================

/// Opaque, server-assigned document identifier.
///
/// The backend is free to issue numeric or string ids; both deserialize into
/// the same opaque value. The id is stable for the document's lifetime and is
/// the only field the client may use to address a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

// =============================================================================
// Wire Descriptor
// =============================================================================

/// Document descriptor exactly as returned by `GET /documents`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    pub id: DocumentId,
    pub name: String,
    pub file_type: String,
    pub upload_date_time: String,
}

// =============================================================================
// Client Document
// =============================================================================

/// A backend document enriched for display.
///
/// Produced from a [`DocumentDescriptor`] when the collection is fetched.
/// Everything except `id` may be replaced wholesale by the next refresh;
/// the client never mutates a document in place apart from updating the
/// download counter after a completed download.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    /// Original filename, extension included.
    pub name: String,
    /// MIME type string as reported by the backend.
    pub file_type: String,
    /// Upload timestamp as the raw ISO-8601 string; parsed at render time.
    pub upload_date_time: String,
    /// Thumbnail/preview URL, derived deterministically from the id.
    pub preview_url: String,
    /// Download counter, fetched best-effort per document.
    pub downloads: u32,
}

impl Document {
    /// Combine a wire descriptor with its lazily fetched download count.
    pub fn from_descriptor(descriptor: DocumentDescriptor, downloads: u32) -> Self {
        let preview_url = preview_url(&descriptor.id);
        Self {
            id: descriptor.id,
            name: descriptor.name,
            file_type: descriptor.file_type,
            upload_date_time: descriptor.upload_date_time,
            preview_url,
            downloads,
        }
    }

    /// Classify the document by its MIME type.
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.file_type)
    }
}

/// Preview endpoint URL for a document id.
pub fn preview_url(id: &DocumentId) -> String {
    format!("{}/documents/{}/preview", API_BASE_URL, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_numbers_and_strings() {
        let numeric: DocumentId = serde_json::from_str("42").unwrap();
        assert_eq!(numeric.as_str(), "42");

        let text: DocumentId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(text.as_str(), "a1b2");
    }

    #[test]
    fn descriptor_parses_camel_case_fields() {
        let json = r#"{
            "id": 7,
            "name": "report.pdf",
            "fileType": "application/pdf",
            "uploadDateTime": "2024-01-15T10:30:00Z"
        }"#;
        let descriptor: DocumentDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.name, "report.pdf");
        assert_eq!(descriptor.file_type, "application/pdf");

        let doc = Document::from_descriptor(descriptor, 3);
        assert_eq!(doc.preview_url, "/api/documents/7/preview");
        assert_eq!(doc.downloads, 3);
        assert_eq!(doc.kind(), FileKind::Pdf);
    }
}
