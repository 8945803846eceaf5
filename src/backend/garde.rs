//! The garde vocabulary: derive attributes plus custom rule functions.
//!
//! garde has no per-rule message override, so every constraint is a custom
//! function that returns the shared message verbatim. The one exception is
//! `file`, where the built-in `required` rule handles `None` and the report
//! adapter rewrites garde's own wording into the shared message.

use garde::Validate;

use super::FormSchema;
use crate::messages;
use crate::payload::{self, FileUpload, FormPayload};
use crate::report::{FieldError, ValidationReport};
use crate::selector::BackendId;

/// Validates payloads through an internal `#[derive(garde::Validate)]`
/// mirror of the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct GardeBackend;

impl GardeBackend {
    pub fn new() -> Self {
        Self
    }
}

impl FormSchema for GardeBackend {
    fn id(&self) -> BackendId {
        BackendId::Garde
    }

    fn validate(&self, payload: &FormPayload) -> ValidationReport {
        let form = GardeForm::from(payload);
        let mut report = ValidationReport::new();
        if let Err(garde_report) = form.validate() {
            for (path, error) in garde_report.iter() {
                let field = field_of(&path.to_string());
                let message = if field == "file" {
                    // garde's `required` says "not set"; keep the shared
                    // wording instead.
                    messages::FILE_REQUIRED.to_string()
                } else {
                    error.to_string()
                };
                report.push(FieldError::new(field, message));
            }
        }
        report
    }
}

#[derive(garde::Validate)]
struct GardeForm {
    #[garde(custom(text_min_len))]
    text: String,
    #[garde(custom(select_chosen))]
    select: String,
    #[garde(custom(number_at_least_one))]
    number: f64,
    #[garde(custom(range_in_bounds))]
    range: f64,
    #[garde(custom(date_is_iso))]
    date: String,
    #[garde(required)]
    file: Option<FileUpload>,
    #[garde(custom(checkbox_agreed))]
    checkbox: bool,
    #[garde(custom(radio_known_option))]
    radio: String,
    #[garde(custom(array_has_items), inner(custom(array_item_min_len)))]
    array: Vec<String>,
}

impl From<&FormPayload> for GardeForm {
    fn from(p: &FormPayload) -> Self {
        Self {
            text: p.text.clone(),
            select: p.select.clone(),
            number: p.number,
            range: p.range,
            date: p.date.clone(),
            file: p.file.clone(),
            checkbox: p.checkbox,
            radio: p.radio.clone(),
            array: p.array.clone(),
        }
    }
}

fn text_min_len(value: &str, _: &()) -> garde::Result {
    if value.chars().count() < payload::TEXT_MIN_LEN {
        return Err(garde::Error::new(messages::TEXT_TOO_SHORT));
    }
    Ok(())
}

fn select_chosen(value: &str, _: &()) -> garde::Result {
    if value.is_empty() {
        return Err(garde::Error::new(messages::SELECT_REQUIRED));
    }
    Ok(())
}

// Bound checks are written in accept form so NaN fails them, and infinities
// are ruled out explicitly: JSON has no representation for non-finite
// numbers, and the JSON Schema backend already rejects them.
fn number_at_least_one(value: &f64, _: &()) -> garde::Result {
    if value.is_finite() && *value >= payload::NUMBER_MIN {
        Ok(())
    } else {
        Err(garde::Error::new(messages::NUMBER_TOO_SMALL))
    }
}

fn range_in_bounds(value: &f64, _: &()) -> garde::Result {
    if *value >= payload::RANGE_MIN && *value <= payload::RANGE_MAX {
        Ok(())
    } else {
        Err(garde::Error::new(messages::RANGE_OUT_OF_BOUNDS))
    }
}

fn date_is_iso(value: &str, _: &()) -> garde::Result {
    if !payload::is_iso_date(value) {
        return Err(garde::Error::new(messages::DATE_INVALID));
    }
    Ok(())
}

fn checkbox_agreed(value: &bool, _: &()) -> garde::Result {
    if !*value {
        return Err(garde::Error::new(messages::CHECKBOX_UNCHECKED));
    }
    Ok(())
}

fn radio_known_option(value: &str, _: &()) -> garde::Result {
    if !payload::RADIO_OPTIONS.contains(&value) {
        return Err(garde::Error::new(messages::RADIO_INVALID));
    }
    Ok(())
}

fn array_has_items(value: &[String], _: &()) -> garde::Result {
    if value.len() < payload::ARRAY_MIN_ITEMS {
        return Err(garde::Error::new(messages::ARRAY_EMPTY));
    }
    Ok(())
}

fn array_item_min_len(value: &str, _: &()) -> garde::Result {
    if value.chars().count() < payload::ARRAY_ITEM_MIN_LEN {
        return Err(garde::Error::new(messages::ARRAY_ITEM_TOO_SHORT));
    }
    Ok(())
}

/// garde paths look like `array[0]` or `file`; the payload field is
/// everything before the first separator.
fn field_of(path: &str) -> String {
    path.split(['.', '['])
        .next()
        .unwrap_or(path)
        .to_string()
}
