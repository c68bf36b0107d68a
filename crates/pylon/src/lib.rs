//! # Pylon
//!
//! Schema validation and uniform error translation for small HTTP
//! services.
//!
//! Pylon has two cooperating, stateless components plus a demo
//! assembly:
//!
//! - **Schema validation** (`pylon-schema`): compile a
//!   [`StructureSpec`](schema::StructureSpec) once, then validate raw
//!   payloads into fully-typed values or a complete list of per-field
//!   errors, with string→type coercion and dotted error paths.
//! - **Error translation** (`pylon-envelope`): every failure kind -
//!   shape validation, application-raised, or application-raised with
//!   an operator note - terminates in a deterministic
//!   status + JSON-body envelope.
//! - **Service assembly** (`pylon-service`): config, logging, catalogs,
//!   and the tutorial handlers, wired through the boundary contract.
//!
//! ## Quick Start
//!
//! ```
//! use pylon::prelude::*;
//! use serde_json::json;
//!
//! let spec = StructureSpec::builder("Item")
//!     .field(FieldSpec::required("name", FieldType::String))
//!     .field(FieldSpec::required("price", FieldType::Float))
//!     .build()
//!     .unwrap();
//!
//! match validate(&spec, &json!({"name": "radio", "price": "abc"})) {
//!     Ok(typed) => println!("typed: {}", typed.to_json()),
//!     Err(errors) => {
//!         let envelope = translate(&Failure::validation(errors));
//!         assert_eq!(envelope.status.as_u16(), 422);
//!     }
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/pylon/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export schema types
pub use pylon_schema as schema;

// Re-export envelope types
pub use pylon_envelope as envelope;

// Re-export the demo service assembly
pub use pylon_service as service;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust,ignore
/// use pylon::prelude::*;
/// ```
pub mod prelude {
    pub use pylon_schema::{
        validate, validate_query, EnumSpec, FieldSpec, FieldType, FieldValue, StructureSpec,
        TypedStruct, ValidationError,
    };

    pub use pylon_envelope::{
        translate, Failure, FailureEnvelope, FailureKind, FailureResult, CUSTOM_FAILURE_MESSAGE,
    };

    pub use pylon_service::{init_logging, Catalog, Response, Service, ServiceConfig};
}
