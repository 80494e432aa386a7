//! Character and scene editing error types.

/// Kinds of editing errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum EditorErrorKind {
    /// Input text is not valid JSON
    #[display("Invalid JSON: {}", _0)]
    Parse(String),
    /// Input is valid JSON but does not have the expected shape
    #[display("Unexpected structure: {}", _0)]
    Schema(String),
    /// Characters could not be serialized for export
    #[display("Failed to serialize characters: {}", _0)]
    Serialize(String),
}

/// Editor error with location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{EditorError, EditorErrorKind};
///
/// let err = EditorError::new(EditorErrorKind::Schema("missing `characters`".to_string()));
/// assert!(format!("{}", err).contains("characters"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Editor Error: {} at line {} in {}", kind, line, file)]
pub struct EditorError {
    /// The kind of error that occurred
    pub kind: EditorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl EditorError {
    /// Create a new editor error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EditorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
