//! Backend selection: a closed identifier set mapped to pre-built schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::backend::{FluentBackend, FormSchema, GardeBackend, JsonSchemaBackend};
use crate::error::{FormcheckError, Result};

/// Identifier for one of the three validation vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendId {
    JsonSchema,
    Garde,
    Fluent,
}

impl BackendId {
    /// Every selectable identifier, in picker order.
    pub const ALL: [BackendId; 3] = [BackendId::JsonSchema, BackendId::Garde, BackendId::Fluent];

    /// Stable string form, matching `FromStr` and the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendId::JsonSchema => "jsonschema",
            BackendId::Garde => "garde",
            BackendId::Fluent => "fluent",
        }
    }

    /// Human-readable label for a picker.
    pub fn label(&self) -> &'static str {
        match self {
            BackendId::JsonSchema => "JSON Schema",
            BackendId::Garde => "Garde",
            BackendId::Fluent => "Fluent Rules",
        }
    }
}

impl Default for BackendId {
    fn default() -> Self {
        BackendId::JsonSchema
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendId {
    type Err = FormcheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "jsonschema" => Ok(BackendId::JsonSchema),
            "garde" => Ok(BackendId::Garde),
            "fluent" => Ok(BackendId::Fluent),
            other => Err(FormcheckError::UnknownBackend(other.to_string())),
        }
    }
}

/// One row of picker data: an identifier with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendOption {
    pub id: BackendId,
    pub label: &'static str,
}

/// The selectable backends with display labels, in stable order.
pub fn backend_options() -> [BackendOption; 3] {
    BackendId::ALL.map(|id| BackendOption {
        id,
        label: id.label(),
    })
}

/// Owns one pre-built instance of each backend and tracks the active one.
///
/// Backends are constructed once here and never mutated; switching the
/// selection only changes which one [`schema`] resolves to.
///
/// [`schema`]: SchemaSelector::schema
pub struct SchemaSelector {
    active: BackendId,
    json_schema: JsonSchemaBackend,
    garde: GardeBackend,
    fluent: FluentBackend,
}

impl SchemaSelector {
    /// Build all three backends with the default selection.
    pub fn new() -> Result<Self> {
        Self::with_active(BackendId::default())
    }

    /// Build all three backends with a specific initial selection.
    pub fn with_active(id: BackendId) -> Result<Self> {
        Ok(Self {
            active: id,
            json_schema: JsonSchemaBackend::new()?,
            garde: GardeBackend::new(),
            fluent: FluentBackend::new(),
        })
    }

    /// The currently selected identifier.
    pub fn active(&self) -> BackendId {
        self.active
    }

    /// Switch the active backend. Takes effect on the next `schema()` read.
    pub fn set_backend(&mut self, id: BackendId) {
        tracing::debug!(backend = %id, "switching active backend");
        self.active = id;
    }

    /// The schema for the active identifier.
    pub fn schema(&self) -> &dyn FormSchema {
        self.get(self.active)
    }

    /// Resolve any identifier without changing the selection.
    pub fn get(&self, id: BackendId) -> &dyn FormSchema {
        match id {
            BackendId::JsonSchema => &self.json_schema,
            BackendId::Garde => &self.garde,
            BackendId::Fluent => &self.fluent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_jsonschema() {
        let selector = SchemaSelector::new().unwrap();
        assert_eq!(selector.active(), BackendId::JsonSchema);
        assert_eq!(selector.schema().id(), BackendId::JsonSchema);
    }

    #[test]
    fn test_set_backend_switches_the_derived_schema() {
        let mut selector = SchemaSelector::new().unwrap();

        selector.set_backend(BackendId::Garde);
        assert_eq!(selector.schema().id(), BackendId::Garde);

        selector.set_backend(BackendId::Fluent);
        assert_eq!(selector.schema().id(), BackendId::Fluent);

        selector.set_backend(BackendId::JsonSchema);
        assert_eq!(selector.schema().id(), BackendId::JsonSchema);
    }

    #[test]
    fn test_get_resolves_without_changing_selection() {
        let selector = SchemaSelector::new().unwrap();
        assert_eq!(selector.get(BackendId::Fluent).id(), BackendId::Fluent);
        assert_eq!(selector.active(), BackendId::JsonSchema);
    }

    #[test]
    fn test_options_are_exhaustive_and_order_stable() {
        let options = backend_options();
        let ids: Vec<BackendId> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids, BackendId::ALL);

        let labels: Vec<&str> = options.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["JSON Schema", "Garde", "Fluent Rules"]);
    }

    #[test]
    fn test_id_string_round_trip() {
        for id in BackendId::ALL {
            assert_eq!(id.as_str().parse::<BackendId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_id_is_an_explicit_error() {
        let err = "regex".parse::<BackendId>().unwrap_err();
        assert!(matches!(err, FormcheckError::UnknownBackend(ref s) if s == "regex"));
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&BackendId::JsonSchema).unwrap();
        assert_eq!(json, "\"jsonschema\"");
        let id: BackendId = serde_json::from_str("\"garde\"").unwrap();
        assert_eq!(id, BackendId::Garde);
    }
}
