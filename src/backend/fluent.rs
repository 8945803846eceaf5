//! The fluent vocabulary: chainable rule application, one call per
//! constraint. This is the crate's own vocabulary rather than a third-party
//! one; the builder is public so consumers can express additional forms
//! with it.

use super::FormSchema;
use crate::messages;
use crate::payload::{self, FileUpload, FormPayload};
use crate::report::{FieldError, ValidationReport};
use crate::selector::BackendId;

/// Chainable rule application over plain field values.
///
/// Every rule takes the field name, the value, the constraint parameters,
/// and the message to report on violation. The terminal [`finish`] call
/// yields the collected report.
///
/// ```
/// use formcheck::Validator;
///
/// let report = Validator::new()
///     .min_len("username", "ab", 3, "Username must be at least 3 characters")
///     .checked("terms", false, "You must accept the terms")
///     .finish();
/// assert_eq!(report.len(), 2);
/// ```
///
/// [`finish`]: Validator::finish
#[derive(Debug, Default)]
pub struct Validator {
    report: ValidationReport,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(mut self, field: &str, message: &str) -> Self {
        self.report.push(FieldError::new(field, message));
        self
    }

    /// Minimum length in characters.
    pub fn min_len(self, field: &str, value: &str, min: usize, message: &str) -> Self {
        if value.chars().count() < min {
            self.fail(field, message)
        } else {
            self
        }
    }

    /// Must not be the empty string.
    pub fn non_empty(self, field: &str, value: &str, message: &str) -> Self {
        if value.is_empty() {
            self.fail(field, message)
        } else {
            self
        }
    }

    /// Inclusive lower bound. Written as an accept check so NaN fails, and
    /// infinities are ruled out explicitly: JSON has no representation for
    /// non-finite numbers.
    pub fn at_least(self, field: &str, value: f64, min: f64, message: &str) -> Self {
        if value.is_finite() && value >= min {
            self
        } else {
            self.fail(field, message)
        }
    }

    /// Inclusive bounds on both ends. Accept check, so NaN fails.
    pub fn in_range(self, field: &str, value: f64, min: f64, max: f64, message: &str) -> Self {
        if value >= min && value <= max {
            self
        } else {
            self.fail(field, message)
        }
    }

    /// Strict ISO calendar date (`YYYY-MM-DD`).
    pub fn iso_date(self, field: &str, value: &str, message: &str) -> Self {
        if payload::is_iso_date(value) {
            self
        } else {
            self.fail(field, message)
        }
    }

    /// A file must be attached.
    pub fn attached(self, field: &str, value: Option<&FileUpload>, message: &str) -> Self {
        if value.is_none() {
            self.fail(field, message)
        } else {
            self
        }
    }

    /// A checkbox must be ticked.
    pub fn checked(self, field: &str, value: bool, message: &str) -> Self {
        if value {
            self
        } else {
            self.fail(field, message)
        }
    }

    /// Value must be one of the allowed options.
    pub fn one_of(self, field: &str, value: &str, allowed: &[&str], message: &str) -> Self {
        if allowed.contains(&value) {
            self
        } else {
            self.fail(field, message)
        }
    }

    /// Minimum number of items.
    pub fn min_items(self, field: &str, items: &[String], min: usize, message: &str) -> Self {
        if items.len() < min {
            self.fail(field, message)
        } else {
            self
        }
    }

    /// Minimum length in characters for every item. Item violations are
    /// reported under the collection's field name.
    pub fn each_min_len(self, field: &str, items: &[String], min: usize, message: &str) -> Self {
        let mut validator = self;
        for item in items {
            if item.chars().count() < min {
                validator = validator.fail(field, message);
            }
        }
        validator
    }

    /// Yield the collected report.
    pub fn finish(self) -> ValidationReport {
        self.report
    }
}

/// Validates payloads by running the fluent rule chain over each field in
/// declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentBackend;

impl FluentBackend {
    pub fn new() -> Self {
        Self
    }
}

impl FormSchema for FluentBackend {
    fn id(&self) -> BackendId {
        BackendId::Fluent
    }

    fn validate(&self, p: &FormPayload) -> ValidationReport {
        Validator::new()
            .min_len("text", &p.text, payload::TEXT_MIN_LEN, messages::TEXT_TOO_SHORT)
            .non_empty("select", &p.select, messages::SELECT_REQUIRED)
            .at_least("number", p.number, payload::NUMBER_MIN, messages::NUMBER_TOO_SMALL)
            .in_range(
                "range",
                p.range,
                payload::RANGE_MIN,
                payload::RANGE_MAX,
                messages::RANGE_OUT_OF_BOUNDS,
            )
            .iso_date("date", &p.date, messages::DATE_INVALID)
            .attached("file", p.file.as_ref(), messages::FILE_REQUIRED)
            .checked("checkbox", p.checkbox, messages::CHECKBOX_UNCHECKED)
            .one_of("radio", &p.radio, &payload::RADIO_OPTIONS, messages::RADIO_INVALID)
            .min_items("array", &p.array, payload::ARRAY_MIN_ITEMS, messages::ARRAY_EMPTY)
            .each_min_len(
                "array",
                &p.array,
                payload::ARRAY_ITEM_MIN_LEN,
                messages::ARRAY_ITEM_TOO_SHORT,
            )
            .finish()
    }
}
