//! Conversion pipeline error types.

/// Conversion-specific error conditions.
///
/// Each variant names the pipeline stage that failed so a single
/// human-readable message can be presented to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConvertErrorKind {
    /// Setup synthesis call failed or its output could not be parsed
    #[display("Could not generate the setup JSON: {}", _0)]
    SetupGeneration(String),
    /// Scene planning call failed, did not parse, or returned an empty plan
    #[display("Could not generate the scene plan: {}", _0)]
    ScenePlanning(String),
    /// Setup output lacked a character entry
    #[display("The model did not produce a usable character profile")]
    MissingCharacter,
}

/// Conversion error with source location tracking.
///
/// # Examples
///
/// ```
/// use scenescribe_error::{ConvertError, ConvertErrorKind};
///
/// let err = ConvertError::new(ConvertErrorKind::MissingCharacter);
/// assert!(format!("{}", err).contains("character profile"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Convert Error: {} at line {} in {}", kind, line, file)]
pub struct ConvertError {
    /// The kind of error that occurred
    pub kind: ConvertErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConvertError {
    /// Create a new ConvertError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConvertErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
