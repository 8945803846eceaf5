//! Backend-neutral validation outcome.
//!
//! Each backend translates its library's native failure representation into
//! a [`ValidationReport`], so consumers never see library-specific error
//! types. Per-field failures are data here, not `Err` values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The payload field the constraint belongs to. Item-level failures in
    /// `array` report the field as `array`.
    pub field: String,
    /// The human-readable message paired with the constraint.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Everything a backend has to say about one payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// True when no constraint was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// All messages reported for one field, in report order.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl FromIterator<FieldError> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.first().is_none());
    }

    #[test]
    fn test_messages_for_filters_by_field() {
        let mut report = ValidationReport::new();
        report.push(FieldError::new("text", "too short"));
        report.push(FieldError::new("array", "empty"));
        report.push(FieldError::new("array", "item too short"));

        assert!(!report.is_valid());
        assert_eq!(report.len(), 3);
        assert_eq!(report.messages_for("text"), vec!["too short"]);
        assert_eq!(report.messages_for("array"), vec!["empty", "item too short"]);
        assert!(report.messages_for("radio").is_empty());
    }

    #[test]
    fn test_display_one_error_per_line() {
        let report: ValidationReport = [
            FieldError::new("text", "too short"),
            FieldError::new("checkbox", "must agree"),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.to_string(), "text: too short\ncheckbox: must agree");
    }
}
