//! # Pylon Schema
//!
//! Declarative structure specifications and the validating/coercing
//! engine for Pylon.
//!
//! This crate is the leaf of the Pylon core: given a compiled
//! [`StructureSpec`] (named fields with types, optional defaults,
//! enumerated value sets) and a raw untyped payload, [`validate`]
//! produces either a fully-typed [`TypedStruct`] or the complete list
//! of per-field [`ValidationError`]s. It never emits a transport-level
//! response; translating errors into a client-visible envelope is the
//! job of `pylon-envelope`.
//!
//! - [`StructureSpec`] / [`FieldSpec`] / [`EnumSpec`] - the shape model
//! - [`FieldValue`] / [`TypedStruct`] - typed validation output
//! - [`validate`] / [`validate_query`] - the engine
//! - [`ValidationError`] - per-field failure data

#![doc(html_root_url = "https://docs.rs/pylon-schema/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod spec;
mod validate;
mod value;

pub use error::ValidationError;
pub use spec::{EnumSpec, FieldSpec, FieldType, SpecError, StructureSpec, StructureSpecBuilder};
pub use validate::{validate, validate_query};
pub use value::{FieldValue, TypedStruct};
