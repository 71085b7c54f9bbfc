//! Core data types for the Scenescribe script-to-scene conversion library.
//!
//! This crate provides the foundation data types shared by the backend
//! drivers and the conversion pipeline: credentials, generation
//! request/response values, and the word-count text metric.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod request;
mod text;

pub use credentials::{Credential, CredentialSet};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use text::word_count;
