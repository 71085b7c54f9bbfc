//! Error types for the Scenescribe library.
//!
//! This crate provides the foundation error types used throughout the
//! Scenescribe workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scenescribe_error::{JsonError, ScenescribeResult};
//!
//! fn parse_payload() -> ScenescribeResult<String> {
//!     Err(JsonError::new("unexpected end of input"))?
//! }
//!
//! match parse_payload() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod convert;
mod error;
mod gemini;
mod json;
mod rotation;

pub use config::ConfigError;
pub use convert::{ConvertError, ConvertErrorKind};
pub use error::{ScenescribeError, ScenescribeErrorKind, ScenescribeResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use rotation::{RotationError, RotationErrorKind};
