//! The JSON Schema vocabulary: one declarative document, compiled once.
//!
//! The document carries the constraints; the messages live in
//! [`crate::messages`] and are attached when a violation's instance path is
//! translated back to a payload field. JSON Schema has no calendar, so the
//! `date` field is held to the ISO shape (`pattern`) only; the other two
//! backends additionally reject impossible dates like `2024-13-01`.

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, JSONSchema, ValidationError};
use serde_json::{json, Value};

use super::FormSchema;
use crate::error::{FormcheckError, Result};
use crate::messages;
use crate::payload::{self, FormPayload};
use crate::report::{FieldError, ValidationReport};
use crate::selector::BackendId;

/// Validates payloads against a draft 7 schema compiled at construction.
pub struct JsonSchemaBackend {
    document: Value,
    compiled: JSONSchema,
}

impl JsonSchemaBackend {
    /// Compile the embedded schema document. The document is fixed, so a
    /// compile failure here means the crate itself is broken; it is still
    /// reported as an error rather than a panic.
    pub fn new() -> Result<Self> {
        let document = schema_document();
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&document)
            .map_err(|e| FormcheckError::SchemaCompile(e.to_string()))?;
        Ok(Self { document, compiled })
    }

    /// The raw schema document, for callers that want to render or export it.
    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl FormSchema for JsonSchemaBackend {
    fn id(&self) -> BackendId {
        BackendId::JsonSchema
    }

    fn validate(&self, payload: &FormPayload) -> ValidationReport {
        let instance = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(e) => {
                let mut report = ValidationReport::new();
                report.push(FieldError::new("payload", e.to_string()));
                return report;
            }
        };

        let mut report = ValidationReport::new();
        if let Err(violations) = self.compiled.validate(&instance) {
            for violation in violations {
                report.push(translate(&violation));
            }
        }
        report
    }
}

fn schema_document() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "FormPayload",
        "type": "object",
        "required": [
            "text", "select", "number", "range", "date",
            "file", "checkbox", "radio", "array"
        ],
        "properties": {
            "text": { "type": "string", "minLength": payload::TEXT_MIN_LEN },
            "select": { "type": "string", "minLength": 1 },
            "number": { "type": "number", "minimum": payload::NUMBER_MIN },
            "range": {
                "type": "number",
                "minimum": payload::RANGE_MIN,
                "maximum": payload::RANGE_MAX
            },
            "date": { "type": "string", "pattern": "^\\d{4}-\\d{2}-\\d{2}$" },
            "file": { "type": "object", "required": ["name"] },
            "checkbox": { "const": true },
            "radio": { "enum": payload::RADIO_OPTIONS },
            "array": {
                "type": "array",
                "minItems": payload::ARRAY_MIN_ITEMS,
                "items": {
                    "type": "string",
                    "minLength": payload::ARRAY_ITEM_MIN_LEN
                }
            }
        }
    })
}

/// Map one library violation back to a payload field and its message.
fn translate(violation: &ValidationError<'_>) -> FieldError {
    // Missing properties are reported at the object root; recover the field
    // name from the error kind instead of the instance path.
    if let ValidationErrorKind::Required { property } = &violation.kind {
        let field = property.as_str().unwrap_or_default().to_string();
        let message = message_for(&field, false)
            .map(str::to_string)
            .unwrap_or_else(|| violation.to_string());
        return FieldError::new(field, message);
    }

    let pointer = violation.instance_path.to_string();
    let mut segments = pointer.trim_start_matches('/').splitn(2, '/');
    let field = segments.next().unwrap_or_default().to_string();
    let nested = segments.next().is_some();

    let message = message_for(&field, nested)
        .map(str::to_string)
        .unwrap_or_else(|| violation.to_string());
    FieldError::new(field, message)
}

fn message_for(field: &str, nested: bool) -> Option<&'static str> {
    match field {
        "text" => Some(messages::TEXT_TOO_SHORT),
        "select" => Some(messages::SELECT_REQUIRED),
        "number" => Some(messages::NUMBER_TOO_SMALL),
        "range" => Some(messages::RANGE_OUT_OF_BOUNDS),
        "date" => Some(messages::DATE_INVALID),
        "file" => Some(messages::FILE_REQUIRED),
        "checkbox" => Some(messages::CHECKBOX_UNCHECKED),
        "radio" => Some(messages::RADIO_INVALID),
        "array" if nested => Some(messages::ARRAY_ITEM_TOO_SHORT),
        "array" => Some(messages::ARRAY_EMPTY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_compiles() {
        let backend = JsonSchemaBackend::new().unwrap();
        assert!(backend.document().is_object());
        assert_eq!(backend.id(), BackendId::JsonSchema);
    }

    #[test]
    fn test_sample_payload_is_clean() {
        let backend = JsonSchemaBackend::new().unwrap();
        assert!(backend.validate(&FormPayload::sample()).is_valid());
    }

    #[test]
    fn test_null_file_maps_to_file_message() {
        let backend = JsonSchemaBackend::new().unwrap();
        let mut payload = FormPayload::sample();
        payload.file = None;

        let report = backend.validate(&payload);
        assert_eq!(report.messages_for("file"), vec![messages::FILE_REQUIRED]);
    }

    #[test]
    fn test_item_violation_reports_under_array() {
        let backend = JsonSchemaBackend::new().unwrap();
        let mut payload = FormPayload::sample();
        payload.array = vec!["hi".to_string()];

        let report = backend.validate(&payload);
        assert_eq!(
            report.messages_for("array"),
            vec![messages::ARRAY_ITEM_TOO_SHORT]
        );
    }

    #[test]
    fn test_missing_property_recovered_from_kind() {
        let backend = JsonSchemaBackend::new().unwrap();
        let instance = json!({ "text": "hello" });

        // Validate a raw object directly to exercise the `required` path.
        let mut report = ValidationReport::new();
        if let Err(violations) = backend.compiled.validate(&instance) {
            for violation in violations {
                report.push(translate(&violation));
            }
        }
        assert!(!report.is_valid());
        assert_eq!(
            report.messages_for("checkbox"),
            vec![messages::CHECKBOX_UNCHECKED]
        );
    }
}
