//! The form payload and the constraint constants shared by every backend.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Allowed values for the `radio` field.
pub const RADIO_OPTIONS: [&str; 3] = ["option1", "option2", "option3"];

/// Minimum length for `text`.
pub const TEXT_MIN_LEN: usize = 3;
/// Minimum value for `number`.
pub const NUMBER_MIN: f64 = 1.0;
/// Inclusive lower bound for `range`.
pub const RANGE_MIN: f64 = 0.0;
/// Inclusive upper bound for `range`.
pub const RANGE_MAX: f64 = 100.0;
/// Minimum item count for `array`.
pub const ARRAY_MIN_ITEMS: usize = 1;
/// Minimum length of each `array` item.
pub const ARRAY_ITEM_MIN_LEN: usize = 5;

/// A file-like value standing in for a browser upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Original filename.
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// MIME type, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// The eight-field form contract shared by every backend.
///
/// Field types are the deserialized shape of the submitted form: value-level
/// violations (short text, out-of-range numbers, a missing file) are all
/// representable and left to the backends to report. A payload that does not
/// deserialize at all is an operational error, not a validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormPayload {
    pub text: String,
    pub select: String,
    pub number: f64,
    pub range: f64,
    pub date: String,
    pub file: Option<FileUpload>,
    pub checkbox: bool,
    pub radio: String,
    pub array: Vec<String>,
}

impl FormPayload {
    /// A payload that satisfies every constraint. Used by the CLI `sample`
    /// command and as a test fixture.
    pub fn sample() -> Self {
        Self {
            text: "hello".to_string(),
            select: "a".to_string(),
            number: 1.0,
            range: 50.0,
            date: "2024-01-01".to_string(),
            file: Some(FileUpload {
                name: "resume.pdf".to_string(),
                size: 1024,
                content_type: Some("application/pdf".to_string()),
            }),
            checkbox: true,
            radio: "option1".to_string(),
            array: vec!["hello".to_string()],
        }
    }

    /// Parse a payload from a JSON string.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read a payload from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Strict ISO calendar date check: `YYYY-MM-DD`, zero-padded, and a date
/// that actually exists. The round-trip comparison rejects unpadded forms
/// like `2024-1-1` that chrono would otherwise accept.
pub fn is_iso_date(value: &str) -> bool {
    match chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string() == value,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_round_trips_through_json() {
        let sample = FormPayload::sample();
        let json = serde_json::to_string(&sample).unwrap();
        let parsed = FormPayload::from_json(&json).unwrap();
        assert_eq!(parsed, sample);
    }

    #[test]
    fn test_missing_file_serializes_as_null() {
        let mut payload = FormPayload::sample();
        payload.file = None;
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["file"].is_null());
    }

    #[test]
    fn test_iso_date_accepts_real_dates() {
        assert!(is_iso_date("2024-01-01"));
        assert!(is_iso_date("2000-02-29"));
    }

    #[test]
    fn test_iso_date_rejects_bad_input() {
        assert!(!is_iso_date(""));
        assert!(!is_iso_date("not-a-date"));
        assert!(!is_iso_date("2024-13-01"));
        assert!(!is_iso_date("2023-02-29"));
        assert!(!is_iso_date("2024-1-1"));
    }
}
