//! Test utilities for conversion pipeline tests.
//!
//! Provides a mock driver that routes canned responses by requested model,
//! so the setup and planner stages can be scripted independently.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use scenescribe_core::{Credential, GenerateRequest, GenerateResponse};
use scenescribe_error::{GeminiError, GeminiErrorKind, ScenescribeResult};
use scenescribe_interface::ScenescribeDriver;

/// Model id the setup synthesizer requests.
pub const SETUP_MODEL: &str = "gemini-2.5-flash";

/// Model id the scene planner requests.
pub const PLANNER_MODEL: &str = "gemini-2.5-pro";

/// Mock driver with per-model scripted outcomes.
#[derive(Debug, Default)]
pub struct StageMock {
    responses: HashMap<String, Result<String, GeminiErrorKind>>,
    calls: Mutex<Vec<String>>,
}

impl StageMock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful text response for a model.
    pub fn with_text(mut self, model: &str, text: impl Into<String>) -> Self {
        self.responses.insert(model.to_string(), Ok(text.into()));
        self
    }

    /// Script a failure for a model.
    #[allow(dead_code)]
    pub fn with_error(mut self, model: &str, error: GeminiErrorKind) -> Self {
        self.responses.insert(model.to_string(), Err(error));
        self
    }

    /// Model ids in the order they were requested.
    #[allow(dead_code)]
    pub fn requested_models(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScenescribeDriver for StageMock {
    async fn generate(
        &self,
        _credential: &Credential,
        req: &GenerateRequest,
    ) -> ScenescribeResult<GenerateResponse> {
        self.calls.lock().unwrap().push(req.model.clone());

        match self.responses.get(&req.model) {
            Some(Ok(text)) => Ok(GenerateResponse { text: text.clone() }),
            Some(Err(error)) => Err(GeminiError::new(error.clone()).into()),
            None => Err(GeminiError::new(GeminiErrorKind::EmptyResponse).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-stages"
    }
}

/// A minimal valid setup response: one character, one background.
pub fn setup_response_json() -> String {
    serde_json::json!({
        "character_lock": {
            "CHAR_1": {
                "id": "CHAR_1",
                "name": "Mara Chen",
                "hair": "short, silver",
                "outfit_top": "charcoal blazer"
            }
        },
        "background_lock": {
            "BACKGROUND_1": {
                "id": "BACKGROUND_1",
                "name": "Sunlit kitchen",
                "lighting": "morning light"
            }
        },
        "visual_style": "STYLE-TEXT",
        "negative_prompt": "NEG-TEXT"
    })
    .to_string()
}

/// A setup response with no character entry.
#[allow(dead_code)]
pub fn characterless_setup_json() -> String {
    serde_json::json!({
        "character_lock": {},
        "background_lock": {},
        "visual_style": "STYLE-TEXT",
        "negative_prompt": "NEG-TEXT"
    })
    .to_string()
}
