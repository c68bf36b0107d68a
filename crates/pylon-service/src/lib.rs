//! # Pylon Service
//!
//! Demo boundary assembly for Pylon.
//!
//! This crate wires the validation core (`pylon-schema`) and the error
//! translator (`pylon-envelope`) into a small, transport-free demo
//! service:
//!
//! - [`ServiceConfig`] - typed TOML configuration with defaults
//! - [`init_logging`] - tracing-subscriber setup (JSON or pretty)
//! - [`Catalog`] - constant key→metadata lookups
//! - [`Service`] - the assembled context applying the boundary
//!   contract: validate, dispatch, translate
//!
//! Routing and network transport are deliberately absent; a server
//! embedding this crate passes decoded payloads to the `handle_*`
//! methods and writes the returned [`Response`] out however it likes.

#![doc(html_root_url = "https://docs.rs/pylon-service/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod config;
pub mod handlers;
mod service;
mod telemetry;

pub use catalog::{Catalog, PlatformInfo};
pub use config::{ConfigError, LogFormat, LoggingConfig, ServiceConfig};
pub use service::{Response, Service};
pub use telemetry::{fields, init_logging, TelemetryError, TelemetryResult};
