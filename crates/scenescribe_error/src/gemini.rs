//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// Failed to construct the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the response body could not be read
    #[display("Gemini API request failed: {}", _0)]
    Request(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response contained no candidate text
    #[display("Gemini response contained no candidate text")]
    EmptyResponse,
}

impl GeminiErrorKind {
    /// Check if this error indicates a rejected or exhausted credential.
    ///
    /// Covers authentication failures (401, 403) and quota exhaustion (429).
    /// Rotation treats every failure as grounds for trying the next
    /// credential; this classification exists for diagnostics only.
    pub fn is_credential_rejection(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::Http {
                status_code: 401 | 403 | 429,
                ..
            }
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use scenescribe_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no candidate text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
