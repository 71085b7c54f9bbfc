//! Test utilities for Scenescribe driver tests.
//!
//! Provides a mock driver so rotation behavior can be validated without
//! real API calls.

use std::sync::Mutex;

use async_trait::async_trait;
use scenescribe_core::{Credential, GenerateRequest, GenerateResponse};
use scenescribe_error::{GeminiError, GeminiErrorKind, ScenescribeResult};
use scenescribe_interface::ScenescribeDriver;

/// One scripted mock outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GeminiErrorKind),
}

#[derive(Debug)]
enum MockBehavior {
    Success(String),
    Error(GeminiErrorKind),
    FailThenSucceed {
        failures: usize,
        error: GeminiErrorKind,
        text: String,
    },
    Sequence(Vec<MockResponse>),
}

/// Scripted driver that records every attempt it receives.
#[derive(Debug)]
pub struct MockDriver {
    behavior: MockBehavior,
    attempts: Mutex<Vec<String>>,
}

impl MockDriver {
    /// Succeed on every call with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Success(text.into()))
    }

    /// Fail on every call with the given error kind.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(error))
    }

    /// Fail `failures` times, then succeed with the given text.
    pub fn new_fail_then_succeed(
        failures: usize,
        error: GeminiErrorKind,
        text: impl Into<String>,
    ) -> Self {
        Self::with_behavior(MockBehavior::FailThenSucceed {
            failures,
            error,
            text: text.into(),
        })
    }

    /// Play back the given outcomes in order; further calls fail.
    #[allow(dead_code)]
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::with_behavior(MockBehavior::Sequence(responses))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Number of generate calls received.
    pub fn call_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    /// Raw keys in the order they were attempted.
    pub fn attempted_keys(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScenescribeDriver for MockDriver {
    async fn generate(
        &self,
        credential: &Credential,
        _req: &GenerateRequest,
    ) -> ScenescribeResult<GenerateResponse> {
        let call_index = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(credential.expose().to_string());
            attempts.len() - 1
        };

        let outcome = match &self.behavior {
            MockBehavior::Success(text) => MockResponse::Success(text.clone()),
            MockBehavior::Error(error) => MockResponse::Error(error.clone()),
            MockBehavior::FailThenSucceed {
                failures,
                error,
                text,
            } => {
                if call_index < *failures {
                    MockResponse::Error(error.clone())
                } else {
                    MockResponse::Success(text.clone())
                }
            }
            MockBehavior::Sequence(responses) => responses
                .get(call_index)
                .cloned()
                .unwrap_or(MockResponse::Error(GeminiErrorKind::EmptyResponse)),
        };

        match outcome {
            MockResponse::Success(text) => Ok(GenerateResponse { text }),
            MockResponse::Error(error) => Err(GeminiError::new(error).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }
}
