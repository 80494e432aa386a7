//! Trait definitions for the Storyboard video planning library.
//!
//! This crate defines the two ports the rest of the workspace is written
//! against: the generation capability and the persistent project slot.

mod traits;

pub use traits::{GenerationDriver, ProjectPersistence};
