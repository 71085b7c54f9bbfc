//! Request and response types for structured generation.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A single structured-output generation request.
///
/// The value is immutable once built: construct it through
/// [`GenerateRequest::builder`] and hand it to the rotation executor.
///
/// # Examples
///
/// ```
/// use scenescribe_core::GenerateRequest;
/// use serde_json::json;
///
/// let request = GenerateRequest::builder()
///     .model("gemini-2.5-flash")
///     .prompt("Describe the character.")
///     .response_schema(Some(json!({ "type": "object" })))
///     .response_mime_type(Some("application/json".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model, "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Model identifier to use
    pub model: String,
    /// The prompt text to send
    pub prompt: String,
    /// JSON schema the output must conform to
    #[builder(default)]
    pub response_schema: Option<serde_json::Value>,
    /// Response-format directive (e.g. `application/json`)
    #[builder(default)]
    pub response_mime_type: Option<String>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use scenescribe_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "{\"visual_style\":\"...\"}".to_string(),
/// };
/// assert!(response.text.starts_with('{'));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text payload from the model
    pub text: String,
}
