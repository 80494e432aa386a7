//! Errors from multi-step studio operations.

/// Kinds of workflow errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum WorkflowErrorKind {
    /// A draft could not be assembled from user input
    #[display("Incomplete draft: {}", _0)]
    IncompleteDraft(String),
    /// Script generation needs a story idea and the project has none
    #[display("Project '{}' has no story idea", _0)]
    MissingStoryIdea(String),
    /// A preview for this scene is already in flight
    #[display("Preview already in progress for scene {}", _0)]
    PreviewInProgress(String),
    /// No scene with the given identifier in the project
    #[display("Scene not found: {}", _0)]
    SceneNotFound(String),
    /// A project could not be rendered as JSON
    #[display("Failed to render JSON: {}", _0)]
    Json(String),
}

/// Workflow error with location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{WorkflowError, WorkflowErrorKind};
///
/// let err = WorkflowError::new(WorkflowErrorKind::PreviewInProgress("s-2".to_string()));
/// assert!(format!("{}", err).contains("already in progress"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Workflow Error: {} at line {} in {}", kind, line, file)]
pub struct WorkflowError {
    /// The kind of error that occurred
    pub kind: WorkflowErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl WorkflowError {
    /// Create a new workflow error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WorkflowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
