//! Server validation errors for forms
//!
//! When a form submission fails, the server may answer with a JSON body
//! describing what went wrong:
//!
//! ```json
//! { "message": "Server unavailable" }
//! { "fieldErrors": { "email": ["Already taken", "Invalid"] } }
//! ```
//!
//! [`apply_server_errors`] copies those errors onto anything implementing
//! [`FormErrors`]. Field errors take precedence over the top-level message,
//! only the first message per field is used, and a failure without a body
//! is silently ignored.
//!
//! ```
//! use formkit_server::{apply_server_errors, FormErrorState, RequestFailure};
//! use serde_json::json;
//!
//! let failure = RequestFailure::new("Request failed with status code 422")
//!     .with_response(422, json!({ "fieldErrors": { "email": ["Already taken"] } }));
//!
//! let mut form = FormErrorState::new();
//! apply_server_errors(&failure, &mut form);
//! assert_eq!(form.get("email").unwrap().message.as_deref(), Some("Already taken"));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod mapper;
pub mod response;

pub use config::MapperConfig;
pub use error::{ConfigError, ConfigResult};
pub use form::{FieldError, FormErrorState, FormErrors, ROOT_FIELD, SERVER_ERROR_KIND};
pub use mapper::{apply_server_errors, ServerErrorMapper};
pub use response::{FailureResponse, RequestFailure, ServerValidationErrorResponse};
