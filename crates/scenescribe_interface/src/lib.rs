//! Trait definitions for Scenescribe backend drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use scenescribe_core::{Credential, GenerateRequest, GenerateResponse};
use scenescribe_error::ScenescribeResult;

/// Core trait that all generation backends must implement.
///
/// A driver turns one structured prompt into one structured text response
/// using a single credential. It carries no credential state of its own:
/// the rotation executor owns the credential order and passes one key per
/// attempt, so a driver instance can be shared freely across concurrent
/// conversions.
#[async_trait]
pub trait ScenescribeDriver: Send + Sync {
    /// Generate model output for the request using the given credential.
    ///
    /// Any failure — authentication, quota, transport, schema violation —
    /// surfaces as a single error; callers decide whether to try another
    /// credential.
    async fn generate(
        &self,
        credential: &Credential,
        req: &GenerateRequest,
    ) -> ScenescribeResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}
