//! Copying server validation errors onto a form.

use tracing::{debug, trace};

use crate::config::MapperConfig;
use crate::form::{FieldError, FormErrors};
use crate::response::RequestFailure;

/// Copy the errors carried by `failure` onto `form`.
///
/// Uses the default configuration: form-wide errors go to `"root"` and every
/// error is tagged `"server"`. See [`ServerErrorMapper::apply`].
pub fn apply_server_errors<F: FormErrors + ?Sized>(failure: &RequestFailure, form: &mut F) {
    ServerErrorMapper::default().apply(failure, form);
}

/// Maps server validation payloads onto form errors.
#[derive(Debug, Clone, Default)]
pub struct ServerErrorMapper {
    config: MapperConfig,
}

impl ServerErrorMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Copy the errors carried by `failure` onto `form`, returning how many
    /// errors were set.
    ///
    /// - no payload: nothing is set
    /// - `fieldErrors` present: each field gets its first message, even if
    ///   `message` is also present
    /// - otherwise a non-empty `message` goes to the root field
    pub fn apply<F: FormErrors + ?Sized>(&self, failure: &RequestFailure, form: &mut F) -> usize {
        let Some(payload) = failure.payload() else {
            trace!(failure = %failure, "no validation payload to map");
            return 0;
        };

        if let Some(field_errors) = payload.field_errors {
            let count = field_errors.len();
            for (field, messages) in field_errors {
                let message = messages.into_iter().next();
                form.set_error(&field, FieldError::new(&self.config.error_kind, message));
            }
            debug!(count, "applied server field errors");
            return count;
        }

        match payload.message {
            Some(message) if !message.is_empty() => {
                form.set_error(
                    &self.config.root_field,
                    FieldError::new(&self.config.error_kind, Some(message)),
                );
                debug!(field = %self.config.root_field, "applied server root error");
                1
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormErrorState;
    use serde_json::json;

    /// Records every call, in order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, FieldError)>,
    }

    impl FormErrors for Recorder {
        fn set_error(&mut self, field: &str, error: FieldError) {
            self.calls.push((field.to_string(), error));
        }
    }

    fn failure(data: serde_json::Value) -> RequestFailure {
        RequestFailure::new("Request failed with status code 422").with_response(422, data)
    }

    #[test]
    fn first_message_only() {
        let mut form = Recorder::default();
        apply_server_errors(
            &failure(json!({ "fieldErrors": { "email": ["Already taken", "Invalid"] } })),
            &mut form,
        );
        assert_eq!(
            form.calls,
            vec![("email".to_string(), FieldError::server("Already taken"))]
        );
    }

    #[test]
    fn message_goes_to_root() {
        let mut form = Recorder::default();
        apply_server_errors(&failure(json!({ "message": "Server unavailable" })), &mut form);
        assert_eq!(
            form.calls,
            vec![("root".to_string(), FieldError::server("Server unavailable"))]
        );
    }

    #[test]
    fn no_response_no_calls() {
        let mut form = Recorder::default();
        apply_server_errors(&RequestFailure::new("Network Error"), &mut form);
        assert!(form.calls.is_empty());
    }

    #[test]
    fn field_errors_take_precedence() {
        let mut form = FormErrorState::new();
        let applied = ServerErrorMapper::default().apply(
            &failure(json!({
                "message": "Validation failed",
                "fieldErrors": { "name": ["Required"], "age": ["Too young"] }
            })),
            &mut form,
        );
        assert_eq!(applied, 2);
        assert!(form.root().is_none());
        assert_eq!(form.get("name"), Some(&FieldError::server("Required")));
        assert_eq!(form.get("age"), Some(&FieldError::server("Too young")));
    }

    #[test]
    fn empty_field_errors_still_win() {
        let mut form = Recorder::default();
        let applied = ServerErrorMapper::default()
            .apply(&failure(json!({ "message": "ignored", "fieldErrors": {} })), &mut form);
        assert_eq!(applied, 0);
        assert!(form.calls.is_empty());
    }

    #[test]
    fn empty_message_list_sets_error_without_message() {
        let mut form = FormErrorState::new();
        apply_server_errors(&failure(json!({ "fieldErrors": { "code": [] } })), &mut form);
        assert_eq!(form.get("code"), Some(&FieldError::new("server", None)));
    }

    #[test]
    fn empty_message_is_ignored() {
        let mut form = Recorder::default();
        apply_server_errors(&failure(json!({ "message": "" })), &mut form);
        assert!(form.calls.is_empty());
    }

    #[test]
    fn payload_without_known_fields_is_ignored() {
        let mut form = Recorder::default();
        apply_server_errors(&failure(json!({ "error": "unexpected" })), &mut form);
        assert!(form.calls.is_empty());
    }

    #[test]
    fn array_message_does_not_drop_field_errors() {
        let mut form = FormErrorState::new();
        apply_server_errors(
            &failure(json!({
                "message": ["email must be an email"],
                "fieldErrors": { "email": ["Already taken"] }
            })),
            &mut form,
        );
        assert_eq!(form.len(), 1);
        assert_eq!(form.get("email"), Some(&FieldError::server("Already taken")));
    }

    #[test]
    fn malformed_entry_skipped_others_applied() {
        let mut form = FormErrorState::new();
        let applied = ServerErrorMapper::default().apply(
            &failure(json!({
                "fieldErrors": {
                    "email": ["Already taken"],
                    "password": { "min": 8 },
                    "username": ["Reserved"]
                }
            })),
            &mut form,
        );
        assert_eq!(applied, 2);
        assert_eq!(form.get("email"), Some(&FieldError::server("Already taken")));
        assert_eq!(form.get("username"), Some(&FieldError::server("Reserved")));
        assert!(form.get("password").is_none());
    }

    #[test]
    fn configured_root_and_kind() {
        let mapper = ServerErrorMapper::new(MapperConfig {
            root_field: "_form".into(),
            error_kind: "remote".into(),
        });
        let mut form = FormErrorState::new();
        mapper.apply(&failure(json!({ "message": "Try again later" })), &mut form);
        assert_eq!(
            form.get("_form"),
            Some(&FieldError::new("remote", Some("Try again later".into())))
        );
        assert_eq!(mapper.config().root_field, "_form");
    }

    #[test]
    fn works_through_trait_object() {
        let mut state = FormErrorState::new();
        let form: &mut dyn FormErrors = &mut state;
        apply_server_errors(&failure(json!({ "message": "Down" })), form);
        assert_eq!(state.root(), Some(&FieldError::server("Down")));
    }
}
