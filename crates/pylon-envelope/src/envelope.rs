//! Error translation.
//!
//! [`translate`] is the terminal handler for every [`Failure`] kind: it
//! produces a [`FailureEnvelope`] - the uniform status + JSON body pair
//! written back to the client - and never fails itself. Envelopes are
//! constructed at the point of failure, immediately serialized, and
//! never mutated afterward.

use crate::failure::Failure;
use http::StatusCode;
use serde_json::{json, Value};

/// Fixed top-level message for failures carrying an operator note.
///
/// Part of the external contract: callers depend on this exact string.
pub const CUSTOM_FAILURE_MESSAGE: &str = "Something went wrong!";

/// The uniform error response: an HTTP status code plus a JSON body
/// with a deterministic shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureEnvelope {
    /// HTTP status code, conventionally 4xx for client errors.
    pub status: StatusCode,
    /// The response body.
    pub body: Value,
}

impl FailureEnvelope {
    /// Serializes the body to canonical JSON bytes.
    ///
    /// Translation of the same failure always yields byte-identical
    /// output here.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        // Value serialization cannot fail; the body holds no non-JSON types.
        serde_json::to_vec(&self.body).unwrap_or_default()
    }
}

/// Translates a failure into its response envelope.
///
/// The three body shapes are part of the external contract:
///
/// - `Validation` → `{"detail": [<field errors>...]}` with status 422
/// - `Application` → `{"detail": "<message>"}` with the declared status
/// - `CustomApplication` →
///   `{"message": "Something went wrong!", "custom_message": "<note>", "detail": "<message>"}`
///   with the declared status
///
/// # Example
///
/// ```
/// use http::StatusCode;
/// use pylon_envelope::{translate, Failure};
///
/// let envelope = translate(&Failure::invalid_key("twitter"));
/// assert_eq!(envelope.status, StatusCode::BAD_REQUEST);
/// assert_eq!(envelope.body, serde_json::json!({"detail": "Invalid key twitter"}));
/// ```
#[must_use]
pub fn translate(failure: &Failure) -> FailureEnvelope {
    let body = match failure {
        Failure::Validation { errors } => {
            json!({ "detail": serde_json::to_value(errors).unwrap_or_default() })
        }
        Failure::Application { detail, .. } => json!({ "detail": detail }),
        Failure::CustomApplication {
            detail,
            custom_message,
            ..
        } => json!({
            "message": CUSTOM_FAILURE_MESSAGE,
            "custom_message": custom_message,
            "detail": detail,
        }),
    };

    FailureEnvelope {
        status: failure.status_code(),
        body,
    }
}
