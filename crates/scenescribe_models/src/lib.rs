//! Backend driver integrations for Scenescribe.
//!
//! Provides the Google Gemini REST driver and the credential-rotation
//! executor that wraps any [`ScenescribeDriver`](scenescribe_interface::ScenescribeDriver).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod rotation;

pub use gemini::GeminiClient;
pub use rotation::RotatingExecutor;
