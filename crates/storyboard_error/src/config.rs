//! Configuration error types.

/// Kinds of configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The layered sources could not be read or merged
    #[display("Failed to build configuration: {}", _0)]
    Sources(String),
    /// The merged settings do not describe a valid configuration
    #[display("Invalid configuration: {}", _0)]
    Invalid(String),
    /// The HTTP client for a provider could not be constructed
    #[display("Failed to create HTTP client: {}", _0)]
    HttpClient(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Invalid("unknown prompt_policy".to_string()));
/// assert!(format!("{}", err).contains("prompt_policy"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
