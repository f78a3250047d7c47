//! AquaThermX Client - HTTP adapter for the analysis service
//!
//! Implements the `AnalysisService` port over a multipart POST to
//! `{base}/analyze/`.

pub mod decode;
pub mod form;
pub mod http;

pub use decode::decode_response;
pub use http::HttpAnalysisClient;
