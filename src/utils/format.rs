//! Formatting utilities for display values.

use chrono::{DateTime, NaiveDateTime};

/// Sentinel rendered for timestamps that do not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Display name for a document: the original filename with its last
/// dot-delimited extension removed. Applied uniformly regardless of type.
pub fn display_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[..index],
        None => name,
    }
}

/// Format an ISO-8601 upload timestamp for the table.
///
/// Accepts offset-carrying (`2024-01-15T10:30:00Z`) and naive
/// (`2024-01-15T10:30:00`) forms; anything else renders the
/// [`INVALID_DATE`] sentinel instead of failing the row.
pub fn format_upload_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    INVALID_DATE.to_string()
}

/// Human-readable form of the local share-link expiry hint.
pub fn format_expiry_hint(hint_ms: u64) -> String {
    let hours = hint_ms / 3_600_000;
    if hours == 1 {
        "Expires in about 1 hour".to_string()
    } else {
        format!("Expires in about {} hours", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("report.pdf"), "report");
        assert_eq!(display_name("archive.tar.gz"), "archive.tar");
        assert_eq!(display_name("README"), "README");
        // Identical stripping regardless of the underlying type
        assert_eq!(display_name("photo.png"), "photo");
        assert_eq!(display_name("slides.pptx"), "slides");
    }

    #[test]
    fn test_format_upload_date() {
        assert_eq!(
            format_upload_date("2024-01-15T10:30:00Z"),
            "2024-01-15 10:30:00"
        );
        assert_eq!(
            format_upload_date("2024-01-15T10:30:00"),
            "2024-01-15 10:30:00"
        );
        assert_eq!(
            format_upload_date("2024-01-15T10:30:00.250Z"),
            "2024-01-15 10:30:00"
        );
        assert_eq!(format_upload_date("not-a-date"), INVALID_DATE);
        assert_eq!(format_upload_date(""), INVALID_DATE);
    }

    #[test]
    fn test_format_expiry_hint() {
        assert_eq!(format_expiry_hint(3_600_000), "Expires in about 1 hour");
        assert_eq!(format_expiry_hint(7_200_000), "Expires in about 2 hours");
    }
}
