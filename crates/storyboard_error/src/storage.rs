//! Project store error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// No project with the given identifier
    #[display("Project not found: {}", _0)]
    NotFound(String),
    /// Failed to create the data directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read the persisted snapshot
    #[display("Failed to read snapshot: {}", _0)]
    Read(String),
    /// Failed to write the persisted snapshot
    #[display("Failed to write snapshot: {}", _0)]
    Write(String),
    /// Failed to read a user-supplied file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to write a user-requested file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// The persisted snapshot is not a valid project list
    #[display("Stored project data is corrupt: {}", _0)]
    Corrupt(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("p-42".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
