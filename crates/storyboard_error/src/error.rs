//! Top-level error wrapper types.

use crate::{ConfigError, EditorError, ExportError, GenerationError, StorageError, WorkflowError};

/// Every error condition a Storyboard operation can surface.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ConfigError, ConfigErrorKind, StoryboardError};
///
/// let config_err = ConfigError::new(ConfigErrorKind::Sources("missing [gemini]".to_string()));
/// let err: StoryboardError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Multi-step studio operation error
    #[from(WorkflowError)]
    Workflow(WorkflowError),
    /// Project store or persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// Generation capability error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Character or scene editing error
    #[from(EditorError)]
    Editor(EditorError),
    /// Asset export error
    #[from(ExportError)]
    Export(ExportError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardResult, WorkflowError, WorkflowErrorKind};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(WorkflowError::new(WorkflowErrorKind::MissingStoryIdea("Draft".to_string())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }

    /// The generation error kind, if this is a generation failure.
    pub fn generation_kind(&self) -> Option<&crate::GenerationErrorKind> {
        match self.kind() {
            StoryboardErrorKind::Generation(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// The storage error kind, if this is a store failure.
    pub fn storage_kind(&self) -> Option<&crate::StorageErrorKind> {
        match self.kind() {
            StoryboardErrorKind::Storage(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// The editor error kind, if this is an editing failure.
    pub fn editor_kind(&self) -> Option<&crate::EditorErrorKind> {
        match self.kind() {
            StoryboardErrorKind::Editor(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// The configuration error kind, if this is a configuration failure.
    pub fn config_kind(&self) -> Option<&crate::ConfigErrorKind> {
        match self.kind() {
            StoryboardErrorKind::Config(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// The workflow error kind, if a studio operation was refused.
    pub fn workflow_kind(&self) -> Option<&crate::WorkflowErrorKind> {
        match self.kind() {
            StoryboardErrorKind::Workflow(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// The export error kind, if this is an export failure.
    pub fn export_kind(&self) -> Option<&crate::ExportErrorKind> {
        match self.kind() {
            StoryboardErrorKind::Export(e) => Some(&e.kind),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to StoryboardErrorKind
impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
