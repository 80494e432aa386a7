//! Generation capability error types.

/// Failure conditions of a request to the generation capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No access token configured; raised before any network attempt
    #[display("No API credential configured (set {})", _0)]
    MissingCredential(String),
    /// The remote call itself failed (auth, network, quota)
    #[display("Upstream request failed (status {:?}): {}", status, message)]
    Upstream {
        /// HTTP status code, when the service answered
        status: Option<u16>,
        /// Error message
        message: String,
    },
    /// Response is not valid structured data or omits required fields
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// Well-formed response without a usable payload
    #[display("No content in response: {}", _0)]
    NoContent(String),
}

impl GenerationErrorKind {
    /// Build an upstream failure from an HTTP status and message.
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        GenerationErrorKind::Upstream {
            status,
            message: message.into(),
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingCredential("GEMINI_API_KEY".into()));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
