//! # docex-client
//!
//! HTTP client for the document REST API. The API is an external
//! collaborator: this crate only shapes requests, judges success by the
//! HTTP status, and deserializes the two listing responses. The
//! [`api::DocumentApi`] trait is the seam the explorer controller is
//! written against, so tests can substitute a mock.

pub mod api;
pub mod rest;

pub use api::{DocumentApi, UploadFile};
pub use rest::RestClient;
