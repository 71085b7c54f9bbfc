//! Top-level error wrapper types.

use crate::{ConfigError, ConvertError, GeminiError, JsonError, RotationError};

/// The foundation error enum for the Scenescribe workspace.
///
/// # Examples
///
/// ```
/// use scenescribe_error::{JsonError, ScenescribeError};
///
/// let json_err = JsonError::new("trailing characters");
/// let err: ScenescribeError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScenescribeErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Credential rotation error
    #[from(RotationError)]
    Rotation(RotationError),
    /// Conversion pipeline error
    #[from(ConvertError)]
    Convert(ConvertError),
}

/// Scenescribe error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scenescribe_error::{RotationError, RotationErrorKind, ScenescribeResult};
///
/// fn might_fail() -> ScenescribeResult<()> {
///     Err(RotationError::new(RotationErrorKind::NoCredentials))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scenescribe Error: {}", _0)]
pub struct ScenescribeError(Box<ScenescribeErrorKind>);

impl ScenescribeError {
    /// Create a new error from a kind.
    pub fn new(kind: ScenescribeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScenescribeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScenescribeErrorKind
impl<T> From<T> for ScenescribeError
where
    T: Into<ScenescribeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scenescribe operations.
///
/// # Examples
///
/// ```
/// use scenescribe_error::{JsonError, ScenescribeResult};
///
/// fn parse_record() -> ScenescribeResult<String> {
///     Err(JsonError::new("expected value at line 1"))?
/// }
/// ```
pub type ScenescribeResult<T> = std::result::Result<T, ScenescribeError>;
