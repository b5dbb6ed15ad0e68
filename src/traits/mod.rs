//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP operations (GET, POST, PATCH, DELETE, streaming POST)

pub mod http;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
