//! MIME-based document classification.

/// Document classes the table can render a distinct icon for.
///
/// Derived from the backend's MIME string. The mapping is total: anything
/// unrecognized collapses into [`FileKind::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
    Word,
    Excel,
    Powerpoint,
    #[default]
    Other,
}

impl FileKind {
    /// Classify a MIME type string.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => Self::Pdf,
            "image/png" | "image/jpeg" => Self::Image,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Self::Word
            }
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Self::Excel,
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                Self::Powerpoint
            }
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_mime_types_map_to_distinct_kinds() {
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Image);
        assert_eq!(FileKind::from_mime("image/jpeg"), FileKind::Image);
        assert_eq!(
            FileKind::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            FileKind::Word
        );
        assert_eq!(
            FileKind::from_mime(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            FileKind::Excel
        );
        assert_eq!(
            FileKind::from_mime(
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            ),
            FileKind::Powerpoint
        );
    }

    #[test]
    fn unknown_mime_types_fall_back_to_other() {
        assert_eq!(FileKind::from_mime("text/csv"), FileKind::Other);
        assert_eq!(FileKind::from_mime(""), FileKind::Other);
        assert_eq!(FileKind::from_mime("application/octet-stream"), FileKind::Other);
    }
}
