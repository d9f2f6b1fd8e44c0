//! Hash-based routing between the list and preview views.

use crate::models::DocumentId;

/// Application routes for hash-based navigation.
/// URL format: `#/` for the document list, `#/document/{id}` for a preview.
#[derive(Clone, Debug, PartialEq)]
pub enum AppRoute {
    /// Document list with the upload panel: `#/` or empty hash.
    List,
    /// Inline preview of a single document: `#/document/{id}`.
    Preview { id: DocumentId },
}

impl AppRoute {
    /// Parse a URL hash into a route.
    ///
    /// Anything that is not a well-formed preview path falls back to the
    /// list view rather than erroring.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        match path.strip_prefix("document/") {
            Some(id) if !id.is_empty() => Self::Preview {
                id: DocumentId::from(id),
            },
            _ => Self::List,
        }
    }

    /// Convert the route back into a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::List => "#/".to_string(),
            Self::Preview { id } => format!("#/document/{}", id),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route.
    ///
    /// Setting the hash adds a history entry and fires `hashchange`, which is
    /// what keeps the router's route signal in sync.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::List);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::List);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::List);
        assert_eq!(
            AppRoute::from_hash("#/document/42"),
            AppRoute::Preview {
                id: DocumentId::from("42"),
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/document/a1b2-c3"),
            AppRoute::Preview {
                id: DocumentId::from("a1b2-c3"),
            }
        );
        // Malformed preview paths fall back to the list
        assert_eq!(AppRoute::from_hash("#/document/"), AppRoute::List);
        assert_eq!(AppRoute::from_hash("#/somewhere-else"), AppRoute::List);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::List.to_hash(), "#/");
        assert_eq!(
            AppRoute::Preview {
                id: DocumentId::from("42"),
            }
            .to_hash(),
            "#/document/42"
        );
    }

    #[test]
    fn test_route_round_trip() {
        for hash in ["#/", "#/document/7"] {
            let route = AppRoute::from_hash(hash);
            assert_eq!(route.to_hash(), hash);
        }
    }
}
