//! Project store for Storyboard.
//!
//! The store keeps the full project list in memory and writes a complete
//! snapshot through a [`ProjectPersistence`](storyboard_interface::ProjectPersistence)
//! backend after every mutation.
//!
//! # Backends
//!
//! - [`FileSystemPersistence`] - one JSON file, written atomically
//! - [`InMemoryPersistence`] - in-process fake for tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use storyboard_core::{ProjectDraft, UuidIssuer};
//! use storyboard_storage::{FileSystemPersistence, ProjectStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let persistence = FileSystemPersistence::new("/var/storyboard", "projects.json")?;
//! let store = ProjectStore::open(Arc::new(persistence), Arc::new(UuidIssuer)).await?;
//!
//! let project = store.create(ProjectDraft::builder().name("Test").build()?).await?;
//! assert_eq!(store.list().await[0].id, project.id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;
mod store;

pub use filesystem::{DEFAULT_SLOT, FileSystemPersistence};
pub use memory::InMemoryPersistence;
pub use store::ProjectStore;
