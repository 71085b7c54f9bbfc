//! Scenescribe - narration scripts to text-to-video JSON
//!
//! Scenescribe converts a Vietnamese narration script plus a free-form
//! character/background description into the two artifacts a text-to-video
//! pipeline consumes: a setup JSON object and newline-delimited scene
//! records. One logical generation call is made resilient to individual
//! API-key failures by rotating through a user-supplied key list.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scenescribe::{AspectRatio, ConversionInput, Converter, CredentialSet, GeminiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = Converter::new(GeminiClient::new()?);
//!
//!     let input = ConversionInput::builder()
//!         .character_description("A retired astronaut in a sunlit kitchen.")
//!         .script_text("Xin chào các bạn.")
//!         .aspect_ratio(AspectRatio::Wide)
//!         .credentials(CredentialSet::parse(&std::env::var("GEMINI_API_KEYS")?))
//!         .build()?;
//!
//!     let result = converter.convert(&input).await?;
//!     println!("{}", result.setup_json);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Scenescribe is organized as a workspace with focused crates:
//!
//! - `scenescribe_error` - Error types
//! - `scenescribe_core` - Core data types (credentials, requests, metrics)
//! - `scenescribe_interface` - ScenescribeDriver trait definition
//! - `scenescribe_models` - Gemini driver and credential rotation
//! - `scenescribe_convert` - The conversion pipeline
//!
//! This crate (`scenescribe`) re-exports everything for convenience and
//! ships the CLI binary.

pub use scenescribe_convert::*;
pub use scenescribe_core::*;
pub use scenescribe_error::*;
pub use scenescribe_interface::*;
pub use scenescribe_models::*;
