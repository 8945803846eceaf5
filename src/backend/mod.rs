//! The three validation backends and their shared contract.
//!
//! Each backend expresses the same eight constraints in a different
//! vocabulary: a compiled JSON Schema document, `garde` derive attributes,
//! and this crate's own fluent rule builder. All three report through
//! [`crate::report::ValidationReport`] with the messages from
//! [`crate::messages`], so they are interchangeable from the outside.

pub mod fluent;
pub mod garde;
pub mod json_schema;

pub use self::fluent::{FluentBackend, Validator};
pub use self::garde::GardeBackend;
pub use self::json_schema::JsonSchemaBackend;

use crate::payload::FormPayload;
use crate::report::ValidationReport;
use crate::selector::BackendId;

/// What every validation vocabulary must provide.
pub trait FormSchema: Send + Sync {
    /// The identifier this backend answers to.
    fn id(&self) -> BackendId;

    /// Check every field of the payload, collecting one error per violated
    /// constraint. Never fails at the operational level: the outcome of
    /// validation is always a report.
    fn validate(&self, payload: &FormPayload) -> ValidationReport;
}
