//! Formcheck
//!
//! One eight-field form contract, three interchangeable validation
//! vocabularies:
//!
//! - **JSON Schema**: a declarative document compiled with the `jsonschema` crate
//! - **Garde**: `garde` derive attributes with custom rule functions
//! - **Fluent Rules**: this crate's own chainable rule builder
//!
//! All three enforce the same constraints with the same messages, so a
//! consumer can switch backends at runtime without changing what the user
//! sees. [`SchemaSelector`] holds one pre-built instance of each backend and
//! resolves the active identifier to its schema.
//!
//! ```
//! use formcheck::{BackendId, FormPayload, FormSchema, SchemaSelector};
//!
//! # fn main() -> formcheck::Result<()> {
//! let mut selector = SchemaSelector::new()?;
//! let report = selector.schema().validate(&FormPayload::sample());
//! assert!(report.is_valid());
//!
//! selector.set_backend(BackendId::Garde);
//! assert_eq!(selector.schema().id(), BackendId::Garde);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod messages;
pub mod payload;
pub mod report;
pub mod selector;

pub use backend::{FluentBackend, FormSchema, GardeBackend, JsonSchemaBackend, Validator};
pub use config::{FormcheckConfig, OutputFormat};
pub use error::{FormcheckError, Result};
pub use payload::{FileUpload, FormPayload};
pub use report::{FieldError, ValidationReport};
pub use selector::{backend_options, BackendId, BackendOption, SchemaSelector};
