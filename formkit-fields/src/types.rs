//! Schema descriptors for form fields.
//!
//! A `FieldSchema` describes the shape of one field; an object descriptor
//! holds a named, ordered shape of further descriptors. Descriptors
//! serialize to/from YAML or JSON tagged by `kind`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// The declared shape of a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldSchema {
    /// Nested schema with named fields in declaration order.
    Object {
        #[serde(default)]
        shape: IndexMap<String, FieldSchema>,
    },
    Array {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        element: Option<Box<FieldSchema>>,
    },
    /// Wraps another descriptor and carries a fallback value.
    Default {
        inner: Box<FieldSchema>,
        #[serde(default)]
        value: FieldValue,
    },
    String,
    Boolean,
    Number,
    Nullable {
        inner: Box<FieldSchema>,
    },
    /// A transformation or refinement layered over a base descriptor.
    Effects {
        inner: Box<FieldSchema>,
    },
    /// Any kind this crate does not recognize (dates, enums, unions, ...).
    #[serde(other)]
    Other,
}

impl FieldSchema {
    /// An empty object schema. Add fields with [`FieldSchema::field`].
    pub fn object() -> Self {
        FieldSchema::Object {
            shape: IndexMap::new(),
        }
    }

    pub fn array() -> Self {
        FieldSchema::Array { element: None }
    }

    pub fn array_of(element: FieldSchema) -> Self {
        FieldSchema::Array {
            element: Some(Box::new(element)),
        }
    }

    pub fn string() -> Self {
        FieldSchema::String
    }

    pub fn boolean() -> Self {
        FieldSchema::Boolean
    }

    pub fn number() -> Self {
        FieldSchema::Number
    }

    /// Add a named field to an object schema.
    ///
    /// Has no effect on non-object descriptors.
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        if let FieldSchema::Object { shape } = &mut self {
            shape.insert(name.into(), schema);
        }
        self
    }

    /// Wrap this descriptor with a fallback value.
    pub fn with_default(self, value: impl Into<FieldValue>) -> Self {
        FieldSchema::Default {
            inner: Box::new(self),
            value: value.into(),
        }
    }

    /// Wrap this descriptor in a transformation.
    pub fn with_effect(self) -> Self {
        FieldSchema::Effects {
            inner: Box::new(self),
        }
    }

    pub fn into_nullable(self) -> Self {
        FieldSchema::Nullable {
            inner: Box::new(self),
        }
    }

    /// The descriptor's `kind` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldSchema::Object { .. } => "object",
            FieldSchema::Array { .. } => "array",
            FieldSchema::Default { .. } => "default",
            FieldSchema::String => "string",
            FieldSchema::Boolean => "boolean",
            FieldSchema::Number => "number",
            FieldSchema::Nullable { .. } => "nullable",
            FieldSchema::Effects { .. } => "effects",
            FieldSchema::Other => "other",
        }
    }

    /// Peel off every `effects` layer and return the base descriptor.
    pub fn unwrap_effects(&self) -> &FieldSchema {
        match self {
            FieldSchema::Effects { inner } => inner.unwrap_effects(),
            other => other,
        }
    }
}
