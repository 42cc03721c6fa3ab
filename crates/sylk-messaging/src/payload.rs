//! File-transfer payload decoding and display formatting.
//!
//! The body of an `application/sylk-file-transfer` message is a JSON
//! object describing the transferred file. Decoding is explicit: any
//! failure yields `PayloadError` and the view renders a permanent
//! error row, instead of limping along with a half-parsed map.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffix appended to filenames by encrypted-at-rest transfers.
const SECURE_SUFFIX: &str = ".asc";

/// 1024-based size units.
const SIZE_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Decoded metadata of a transferred file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferPayload {
    pub filename: String,
    /// Size in bytes as reported by the sender. Untrusted; display
    /// code clamps nonsensical values.
    #[serde(default)]
    pub filesize: i64,
    /// MIME type of the file, when the sender reported one.
    #[serde(default)]
    pub filetype: Option<String>,
    /// Download URL for the file.
    #[serde(default)]
    pub url: Option<String>,
}

/// Payload decoding failure.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid file-transfer payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransferPayload {
    /// Decode a message body.
    pub fn from_json(content: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Filename as shown to the user: one trailing secure-transfer
    /// suffix stripped, underscores read as spaces.
    pub fn display_name(&self) -> String {
        let name = self
            .filename
            .strip_suffix(SECURE_SUFFIX)
            .unwrap_or(&self.filename);
        name.replace('_', " ")
    }

    /// Human-readable size of the transferred file.
    pub fn formatted_size(&self) -> String {
        format_file_size(self.filesize)
    }

    /// Whether the payload describes an image.
    pub fn is_image(&self) -> bool {
        self.filetype.as_deref().is_some_and(|t| t.starts_with("image/"))
    }
}

/// Format a byte count with one decimal and a 1024-based unit.
///
/// Sizes at or below zero render as `"0 B"`; sizes past the TB range
/// stay in TB.
pub fn format_file_size(size: i64) -> String {
    if size <= 0 {
        return "0 B".to_string();
    }
    let exponent = ((size as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = size as f64 / 1024f64.powi(exponent as i32);
    format!("{:.1} {}", value, SIZE_UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let payload = TransferPayload::from_json(
            r#"{"filename":"photo.jpg","filesize":2048,"filetype":"image/jpeg","url":"https://files.example.com/photo.jpg"}"#,
        )
        .unwrap();
        assert_eq!(payload.filename, "photo.jpg");
        assert_eq!(payload.filesize, 2048);
        assert!(payload.is_image());
        assert_eq!(payload.url.as_deref(), Some("https://files.example.com/photo.jpg"));
    }

    #[test]
    fn test_decode_defaults() {
        let payload = TransferPayload::from_json(r#"{"filename":"notes.txt"}"#).unwrap();
        assert_eq!(payload.filesize, 0);
        assert_eq!(payload.filetype, None);
        assert_eq!(payload.url, None);
        assert!(!payload.is_image());
    }

    #[test]
    fn test_decode_failures() {
        assert!(TransferPayload::from_json("not json").is_err());
        assert!(TransferPayload::from_json("[1,2,3]").is_err());
        // Missing filename is a decode error, not an empty record.
        assert!(TransferPayload::from_json(r#"{"filesize":10}"#).is_err());
    }

    #[test]
    fn test_display_name() {
        let payload = TransferPayload {
            filename: "my_file.txt.asc".to_string(),
            ..Default::default()
        };
        assert_eq!(payload.display_name(), "my file.txt");

        let plain = TransferPayload {
            filename: "report.pdf".to_string(),
            ..Default::default()
        };
        assert_eq!(plain.display_name(), "report.pdf");
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(500), "500.0 B");
        assert_eq!(format_file_size(1023), "1023.0 B");
        assert_eq!(format_file_size(1024), "1.0 kB");
        assert_eq!(format_file_size(1500), "1.5 kB");
        assert_eq!(format_file_size(1_048_576), "1.0 MB");
        assert_eq!(format_file_size(1024_i64.pow(3)), "1.0 GB");
        assert_eq!(format_file_size(1024_i64.pow(4)), "1.0 TB");
    }

    #[test]
    fn test_format_file_size_clamps() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(-42), "0 B");
        // Past the largest unit the value keeps growing in TB.
        assert_eq!(format_file_size(1024_i64.pow(5)), "1024.0 TB");
    }
}
