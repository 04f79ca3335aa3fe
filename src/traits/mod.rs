//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - the HEAD request the connectivity probe issues

pub mod http;

pub use http::{HttpClient, HttpError, Response};
