//! Google Gemini REST API implementation.
//!
//! This driver speaks the `generateContent` REST endpoint directly so that
//! each call can carry its own credential and a structured-output schema.
//! The credential travels as a query parameter and is never interpolated
//! into logged strings.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use scenescribe_core::{Credential, GenerateRequest, GenerateResponse};
use scenescribe_error::{GeminiError, GeminiErrorKind, ScenescribeResult};
use scenescribe_interface::ScenescribeDriver;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Google Gemini REST API.
///
/// Stateless with respect to credentials: one key is supplied per
/// [`generate`](ScenescribeDriver::generate) call, which makes the client a
/// natural fit for the rotation executor. The underlying `reqwest::Client`
/// pools connections across calls.
///
/// # Example
///
/// ```no_run
/// use scenescribe_core::{Credential, GenerateRequest};
/// use scenescribe_interface::ScenescribeDriver;
/// use scenescribe_models::GeminiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
/// let key = Credential::new(std::env::var("GEMINI_API_KEY")?);
///
/// let request = GenerateRequest::builder()
///     .model("gemini-2.5-flash")
///     .prompt("Return {\"ok\": true} as JSON.")
///     .response_mime_type(Some("application/json".to_string()))
///     .build()?;
///
/// let response = client.generate(&key, &request).await?;
/// println!("{}", response.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequestBody {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseBody {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiClient {
    /// Create a new client against the public Gemini endpoint.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> ScenescribeResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new client against a custom base URL (proxy or test server).
    pub fn with_base_url(base_url: impl Into<String>) -> ScenescribeResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    fn request_body(req: &GenerateRequest) -> GeminiRequestBody {
        let generation_config =
            if req.response_mime_type.is_some() || req.response_schema.is_some() {
                Some(GenerationConfig {
                    response_mime_type: req.response_mime_type.clone(),
                    response_schema: req.response_schema.clone(),
                })
            } else {
                None
            };

        GeminiRequestBody {
            contents: vec![Content {
                parts: vec![Part {
                    text: req.prompt.clone(),
                }],
            }],
            generation_config,
        }
    }

    fn extract_text(body: GeminiResponseBody) -> Option<String> {
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
    }
}

#[async_trait]
impl ScenescribeDriver for GeminiClient {
    #[instrument(
        name = "gemini_generate",
        skip(self, credential, req),
        fields(model = %req.model, key = %credential)
    )]
    async fn generate(
        &self,
        credential: &Credential,
        req: &GenerateRequest,
    ) -> ScenescribeResult<GenerateResponse> {
        let url = self.endpoint(&req.model);
        let body = Self::request_body(req);

        let response = self
            .client
            .post(&url)
            .query(&[("key", credential.expose())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::Http {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: GeminiResponseBody = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Request(e.to_string())))?;

        let text = Self::extract_text(parsed)
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        Ok(GenerateResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
