//! # Pylon Envelope
//!
//! Failure taxonomy and uniform error translation for Pylon.
//!
//! Any failure on a request path - a structural validation failure
//! produced by `pylon-schema`, or a semantic failure raised by handler
//! logic - ends up as a [`Failure`], and [`translate`] turns it into the
//! [`FailureEnvelope`] written back to the client. The translator is the
//! terminal handler: it never fails, and translating the same failure
//! twice yields byte-identical envelopes.
//!
//! - [`Failure`] / [`FailureKind`] - the closed failure union
//! - [`translate`] / [`FailureEnvelope`] - status + body translation
//! - [`CUSTOM_FAILURE_MESSAGE`] - the fixed operator-note wrapper text

#![doc(html_root_url = "https://docs.rs/pylon-envelope/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod envelope;
mod failure;

pub use envelope::{translate, FailureEnvelope, CUSTOM_FAILURE_MESSAGE};
pub use failure::{Failure, FailureKind, VALIDATION_STATUS};

/// Result type alias for handler logic that can raise a [`Failure`].
pub type FailureResult<T> = Result<T, Failure>;
