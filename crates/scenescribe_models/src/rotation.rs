//! Credential rotation over a generation backend.
//!
//! One logical generation call is made resilient to individual key failures
//! by trying each credential in order and returning the first success. A
//! backend call is assumed to carry billing side effects, so attempts are
//! strictly sequential — credentials are never raced concurrently.

use scenescribe_core::{CredentialSet, GenerateRequest, GenerateResponse};
use scenescribe_error::{RotationError, RotationErrorKind, ScenescribeResult};
use scenescribe_interface::ScenescribeDriver;

/// Executes generation requests across an ordered credential set.
///
/// Stateless between calls: the executor holds only the driver, so a single
/// instance can serve independent conversions concurrently.
///
/// # Example
///
/// ```no_run
/// use scenescribe_core::{CredentialSet, GenerateRequest};
/// use scenescribe_models::{GeminiClient, RotatingExecutor};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let executor = RotatingExecutor::new(GeminiClient::new()?);
/// let keys = CredentialSet::parse("key-one key-two");
///
/// let request = GenerateRequest::builder()
///     .model("gemini-2.5-flash")
///     .prompt("Hello")
///     .build()?;
///
/// let response = executor.execute(&keys, &request).await?;
/// println!("{}", response.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RotatingExecutor<D> {
    driver: D,
}

impl<D: ScenescribeDriver> RotatingExecutor<D> {
    /// Create an executor over the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Access the wrapped driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Attempt the request with each credential in order, returning the
    /// first success.
    ///
    /// Each credential gets exactly one attempt — there is no per-credential
    /// retry or backoff; switching keys is the resilience mechanism. Failed
    /// attempts are logged with a masked key suffix only.
    ///
    /// # Errors
    ///
    /// - [`RotationErrorKind::NoCredentials`] when the set is empty; no
    ///   backend call is made.
    /// - [`RotationErrorKind::Exhausted`] when every credential fails; the
    ///   last underlying error message is retained for diagnostics.
    #[tracing::instrument(
        skip_all,
        fields(provider = self.driver.provider_name(), model = %request.model, keys = credentials.len())
    )]
    pub async fn execute(
        &self,
        credentials: &CredentialSet,
        request: &GenerateRequest,
    ) -> ScenescribeResult<GenerateResponse> {
        if credentials.is_empty() {
            return Err(RotationError::new(RotationErrorKind::NoCredentials).into());
        }

        let mut last_error = None;

        for credential in credentials.iter() {
            match self.driver.generate(credential, request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::warn!(
                        key = %credential.masked(),
                        error = %e,
                        "API key failed, trying the next one"
                    );
                    last_error = Some(e);
                }
            }
        }

        let last_error = last_error.map(|e| e.to_string()).unwrap_or_default();
        tracing::error!(attempts = credentials.len(), "all API keys failed");

        Err(RotationError::new(RotationErrorKind::Exhausted {
            attempts: credentials.len(),
            last_error,
        })
        .into())
    }
}
