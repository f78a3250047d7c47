//! AquaThermX Core - Domain models, request building and view derivation
//!
//! This crate contains the analysis data model, the pure request builder, the
//! result-to-view projection and the port definitions the client and console
//! crates plug into.

pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod ports;
pub mod request;
pub mod routing;
pub mod view;

pub use error::{AquathermError, ErrorInfo, ErrorKind, Result};
