//! Asset export error types.

/// Kinds of export errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// Project has no scenes to export
    #[display("Project '{}' has no scenes to export", _0)]
    NoScenes(String),
    /// Two scenes share a scene number, so their image filenames would collide
    #[display("Duplicate scene number {}", _0)]
    DuplicateSceneNumber(u32),
    /// A scene's stored image could not be decoded
    #[display("Scene {} image could not be decoded: {}", scene_number, message)]
    Decode {
        /// Number of the scene whose image failed
        scene_number: u32,
        /// Decoder message
        message: String,
    },
    /// Archive assembly failed
    #[display("Failed to assemble archive: {}", _0)]
    Archive(String),
    /// Writing the archive to disk failed
    #[display("Failed to write archive: {}", _0)]
    Write(String),
}

/// Export error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
