//! Credential rotation error types.

/// Rotation-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RotationErrorKind {
    /// No usable credential after parsing the credential string
    #[display("No API keys were provided")]
    NoCredentials,
    /// Every credential in the set failed
    #[display(
        "All {} API keys failed or reached their quota. Check the keys and try again.",
        attempts
    )]
    Exhausted {
        /// Number of credentials attempted
        attempts: usize,
        /// Message of the last underlying failure, kept for diagnostics
        last_error: String,
    },
}

/// Rotation error with source location tracking.
///
/// # Examples
///
/// ```
/// use scenescribe_error::{RotationError, RotationErrorKind};
///
/// let err = RotationError::new(RotationErrorKind::NoCredentials);
/// assert!(format!("{}", err).contains("No API keys"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Rotation Error: {} at line {} in {}", kind, line, file)]
pub struct RotationError {
    /// The kind of error that occurred
    pub kind: RotationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RotationError {
    /// Create a new RotationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RotationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
