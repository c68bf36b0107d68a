//! The failure taxonomy.
//!
//! [`Failure`] is the closed union of everything that can go wrong while
//! handling a request:
//!
//! - [`Failure::Validation`] - structural/type mismatch, produced by the
//!   validator before any handler logic runs. Never raised; carried as
//!   a value and translated by the boundary's default handling.
//! - [`Failure::Application`] - semantic/business-rule failure raised
//!   deliberately by handler logic, with an explicit status code.
//! - [`Failure::CustomApplication`] - an application failure that also
//!   carries an auxiliary human-readable note for operators.
//!
//! Nothing here is fatal: every kind terminates in a well-formed
//! client-visible envelope via [`translate`](crate::translate).

use http::StatusCode;
use pylon_schema::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status code for request-shape validation failures.
///
/// The source this service descends from mixed 400 and 422 across its
/// validation paths; Pylon deliberately uses 422 for shape validation
/// and leaves 400 to semantic failures raised by handlers.
pub const VALIDATION_STATUS: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

/// The kind of a [`Failure`], for classification and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Request-shape validation failure (pre-execution).
    Validation,
    /// Application-raised semantic failure.
    Application,
    /// Application-raised failure with an operator note.
    CustomApplication,
}

/// A request-handling failure.
///
/// # Example
///
/// ```
/// use http::StatusCode;
/// use pylon_envelope::Failure;
///
/// fn place_order(count: i64) -> Result<(), Failure> {
///     if count <= 0 {
///         return Err(Failure::application(
///             StatusCode::BAD_REQUEST,
///             "count must be > 0",
///         ));
///     }
///     Ok(())
/// }
///
/// assert_eq!(place_order(0).unwrap_err().status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Failure {
    /// Request-shape validation failed.
    #[error("validation failed with {} error(s)", errors.len())]
    Validation {
        /// The per-field validation errors.
        errors: Vec<ValidationError>,
    },

    /// A semantic failure raised by handler logic.
    #[error("{detail}")]
    Application {
        /// The HTTP status code to respond with.
        status: StatusCode,
        /// Detail message for the client.
        detail: String,
    },

    /// A semantic failure with an auxiliary operator note.
    #[error("{detail}")]
    CustomApplication {
        /// The HTTP status code to respond with.
        status: StatusCode,
        /// Detail message for the client.
        detail: String,
        /// Auxiliary human-readable note for operators.
        custom_message: String,
    },
}

impl Failure {
    /// Creates a validation failure from a list of field errors.
    #[must_use]
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        Self::Validation { errors }
    }

    /// Creates an application failure with an explicit status code.
    #[must_use]
    pub fn application(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::Application {
            status,
            detail: detail.into(),
        }
    }

    /// Creates an application failure carrying an operator note.
    #[must_use]
    pub fn custom(
        status: StatusCode,
        detail: impl Into<String>,
        custom_message: impl Into<String>,
    ) -> Self {
        Self::CustomApplication {
            status,
            detail: detail.into(),
            custom_message: custom_message.into(),
        }
    }

    /// Creates the conventional unknown-enumeration-key failure:
    /// status 400 with detail `Invalid key {key}`.
    #[must_use]
    pub fn invalid_key(key: &str) -> Self {
        Self::application(StatusCode::BAD_REQUEST, format!("Invalid key {key}"))
    }

    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Validation { .. } => FailureKind::Validation,
            Self::Application { .. } => FailureKind::Application,
            Self::CustomApplication { .. } => FailureKind::CustomApplication,
        }
    }

    /// Returns the HTTP status code for this failure.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => VALIDATION_STATUS,
            Self::Application { status, .. } | Self::CustomApplication { status, .. } => *status,
        }
    }
}
