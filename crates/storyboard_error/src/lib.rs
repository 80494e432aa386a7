//! Error types for the Storyboard library.
//!
//! This crate provides the foundation error types used throughout the Storyboard workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{StoryboardResult, StorageError, StorageErrorKind};
//!
//! fn find_project() -> StoryboardResult<String> {
//!     Err(StorageError::new(StorageErrorKind::NotFound("p-1".to_string())))?
//! }
//!
//! match find_project() {
//!     Ok(name) => println!("Got: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod editor;
mod error;
mod export;
mod generation;
mod storage;
mod workflow;

pub use config::{ConfigError, ConfigErrorKind};
pub use editor::{EditorError, EditorErrorKind};
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use export::{ExportError, ExportErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use workflow::{WorkflowError, WorkflowErrorKind};
