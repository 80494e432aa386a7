//! Storyboard - plan animated videos with a generative model.
//!
//! Storyboard keeps a local list of video projects. Each project has a story
//! idea, a cast of characters with concrete visual features, and a script of
//! numbered scenes whose visual prompts restate those features so preview
//! images stay consistent from scene to scene.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyboard::{ProjectDraft, Studio, StoryboardConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryboardConfig::load()?;
//!     let studio = Studio::open(&config).await?;
//!
//!     let draft = ProjectDraft::builder()
//!         .name("Fox Tales")
//!         .story_idea("A fox and an owl search for the lost moon.")
//!         .build()?;
//!     let project = studio.create_project(draft).await?;
//!     let project = studio.generate_script(&project.id).await?;
//!     println!("{} scenes", project.scenes.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyboard_core` - Projects, characters, scenes, requests
//! - `storyboard_error` - Error types
//! - `storyboard_interface` - Generation and persistence ports
//! - `storyboard_rate_limit` - Request limiting for preview fan-out
//! - `storyboard_models` - Gemini driver (and a scripted mock)
//! - `storyboard_storage` - Project store and snapshot backends
//! - `storyboard_orchestrator` - Scene, preview and idea generation
//! - `storyboard_editor` - Character and scene editing
//! - `storyboard_export` - Zip asset export
//!
//! This crate (`storyboard`) re-exports everything for convenience.

pub mod cli;
mod config;
mod studio;
pub mod telemetry;

pub use config::{OrchestratorConfig, StorageConfig, StoryboardConfig};
pub use studio::Studio;

pub use storyboard_core::*;
pub use storyboard_editor::*;
pub use storyboard_error::*;
pub use storyboard_export::*;
pub use storyboard_interface::*;
pub use storyboard_models::*;
pub use storyboard_orchestrator::*;
pub use storyboard_rate_limit::*;
pub use storyboard_storage::*;
