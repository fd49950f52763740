//! The form side of error mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name used for errors not attached to any field.
pub const ROOT_FIELD: &str = "root";

/// Error kind tag for errors reported by the server.
pub const SERVER_ERROR_KIND: &str = "server";

/// An error attached to one form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// Where the error came from, e.g. `"server"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldError {
    pub fn new(kind: impl Into<String>, message: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            message,
        }
    }

    /// A `"server"` error with the given message.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(SERVER_ERROR_KIND, Some(message.into()))
    }
}

/// Anything that can hold per-field errors for a form.
///
/// Implement this for the handle of whatever form library is in use.
pub trait FormErrors {
    /// Set `field`'s error, replacing any previous one.
    fn set_error(&mut self, field: &str, error: FieldError);
}

impl<T: FormErrors + ?Sized> FormErrors for &mut T {
    fn set_error(&mut self, field: &str, error: FieldError) {
        (**self).set_error(field, error)
    }
}

/// In-memory form error state, keyed by field name in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormErrorState {
    errors: IndexMap<String, FieldError>,
}

impl FormErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// The form-wide error, if any.
    pub fn root(&self) -> Option<&FieldError> {
        self.get(ROOT_FIELD)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl FormErrors for FormErrorState {
    fn set_error(&mut self, field: &str, error: FieldError) {
        self.errors.insert(field.to_string(), error);
    }
}
