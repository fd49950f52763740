//! Form schema descriptors and initial value derivation
//!
//! `formkit-fields` describes the fields of a form and derives the values a
//! form should start with. It knows nothing about any particular form or
//! schema library; consumers describe their schema once and compile it.
//!
//! # Architecture
//!
//! - **Descriptors**: `FieldSchema` is the serde-facing description, one `kind` per field
//! - **Compiled kinds**: `CompiledSchema` classifies every field once into a `FieldKind`
//! - **Defaults**: `derive_defaults()` walks the compiled schema, honoring overrides
//! - **Best effort**: deriving never fails, unrecognized kinds are skipped

pub mod defaults;
pub mod error;
pub mod kind;
pub mod loader;
pub mod types;
pub mod value;

pub use defaults::{derive_defaults, parse_float};
pub use error::{FieldsError, Result};
pub use kind::{CompiledSchema, FieldKind};
pub use loader::{load_schema, SchemaFormat};
pub use types::FieldSchema;
pub use value::{FieldValue, FormValues};
