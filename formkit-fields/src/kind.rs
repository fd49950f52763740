//! Compiled field kinds.
//!
//! A `FieldSchema` is classified once into a `CompiledSchema` so that
//! deriving defaults is a plain `match` on `FieldKind` rather than a
//! structural inspection of descriptors on every call.

use tracing::trace;

use crate::error::{FieldsError, Result};
use crate::types::FieldSchema;
use crate::value::{FieldValue, FormValues};

/// What a field is, for the purpose of choosing its initial value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Object(CompiledSchema),
    Array,
    /// Carries the declared fallback value.
    DefaultWrapped(FieldValue),
    String,
    Boolean,
    Number,
    Nullable,
    Unknown,
}

impl FieldKind {
    /// Classify a descriptor.
    ///
    /// First match wins, in this order: object, array, default wrapper,
    /// string, boolean, number, nullable. Effect wrappers are unwrapped to
    /// their base descriptor, but only array, string, boolean and number
    /// are recognized through them.
    pub fn classify(schema: &FieldSchema) -> FieldKind {
        match schema {
            FieldSchema::Object { .. } => FieldKind::Object(CompiledSchema::from_shape(schema)),
            FieldSchema::Array { .. } => FieldKind::Array,
            FieldSchema::Default { value, .. } => FieldKind::DefaultWrapped(value.clone()),
            FieldSchema::String => FieldKind::String,
            FieldSchema::Boolean => FieldKind::Boolean,
            FieldSchema::Number => FieldKind::Number,
            FieldSchema::Nullable { .. } => FieldKind::Nullable,
            FieldSchema::Effects { .. } => match schema.unwrap_effects() {
                FieldSchema::Array { .. } => FieldKind::Array,
                FieldSchema::String => FieldKind::String,
                FieldSchema::Boolean => FieldKind::Boolean,
                FieldSchema::Number => FieldKind::Number,
                base => {
                    trace!(base = base.kind_name(), "effect over unsupported kind");
                    FieldKind::Unknown
                }
            },
            FieldSchema::Other => FieldKind::Unknown,
        }
    }
}

/// An object schema whose fields have been classified.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledSchema {
    fields: Vec<(String, FieldKind)>,
}

impl CompiledSchema {
    /// Compile an object descriptor.
    ///
    /// Fails with [`FieldsError::NotAnObject`] for any other top-level kind.
    pub fn compile(schema: &FieldSchema) -> Result<Self> {
        match schema {
            FieldSchema::Object { .. } => Ok(Self::from_shape(schema)),
            other => Err(FieldsError::NotAnObject {
                kind: other.kind_name().to_string(),
            }),
        }
    }

    fn from_shape(schema: &FieldSchema) -> Self {
        let fields = match schema {
            FieldSchema::Object { shape } => shape
                .iter()
                .map(|(name, field)| (name.clone(), FieldKind::classify(field)))
                .collect(),
            _ => Vec::new(),
        };
        Self { fields }
    }

    /// Look up a field's kind by name.
    pub fn get(&self, name: &str) -> Option<&FieldKind> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, kind)| kind)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldKind)> {
        self.fields.iter().map(|(name, kind)| (name.as_str(), kind))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Initial values for this schema. See [`crate::derive_defaults`].
    pub fn defaults(&self, overrides: Option<&FormValues>) -> FormValues {
        crate::defaults::derive_defaults(self, overrides)
    }
}

impl TryFrom<&FieldSchema> for CompiledSchema {
    type Error = FieldsError;

    fn try_from(schema: &FieldSchema) -> Result<Self> {
        Self::compile(schema)
    }
}
