//! Failed requests and the validation payloads they may carry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Body returned by the server when a submission fails validation.
///
/// Usually exactly one of the two fields is set. When `field_errors` is
/// present it wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerValidationErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field name to messages; only the first message of each is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<IndexMap<String, Vec<String>>>,
}

impl ServerValidationErrorResponse {
    /// Read a payload out of a response body, keeping every well-formed part.
    ///
    /// Returns `None` unless the body is a JSON object. Each part is read on
    /// its own: a `message` that is not a string is ignored, a `fieldErrors`
    /// that is not an object counts as absent, and a `fieldErrors` entry
    /// whose messages are not all strings is skipped.
    pub fn from_body(body: &Value) -> Option<Self> {
        let object = body.as_object()?;

        let field_errors = match object.get("fieldErrors") {
            None | Some(Value::Null) => None,
            Some(Value::Object(entries)) => Some(
                entries
                    .iter()
                    .filter_map(|(field, messages)| {
                        match Vec::<String>::deserialize(messages) {
                            Ok(messages) => Some((field.clone(), messages)),
                            Err(e) => {
                                debug!(field = %field, error = %e, "skipping malformed field error");
                                None
                            }
                        }
                    })
                    .collect(),
            ),
            Some(other) => {
                debug!(found = %other, "fieldErrors is not an object");
                None
            }
        };

        let message = object
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            message,
            field_errors,
        })
    }
}

/// The HTTP response attached to a failed request.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureResponse {
    pub status: u16,
    pub data: Value,
}

/// A failed HTTP request, as reported by the client.
///
/// Network-level failures have no response.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct RequestFailure {
    pub message: String,
    pub response: Option<FailureResponse>,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    /// Attach the response the server sent back.
    pub fn with_response(mut self, status: u16, data: Value) -> Self {
        self.response = Some(FailureResponse { status, data });
        self
    }

    /// The validation payload, if the response carried one.
    ///
    /// Returns `None` when there is no response or the body is not a JSON
    /// object. See [`ServerValidationErrorResponse::from_body`].
    pub fn payload(&self) -> Option<ServerValidationErrorResponse> {
        let response = self.response.as_ref()?;
        let payload = ServerValidationErrorResponse::from_body(&response.data);
        if payload.is_none() && !response.data.is_null() {
            debug!(
                status = response.status,
                "response body is not a validation payload"
            );
        }
        payload
    }
}
