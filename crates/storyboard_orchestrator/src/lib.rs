//! Generation flows for Storyboard.
//!
//! The [`Orchestrator`] builds directives for the generation capability,
//! requests structured output, and validates what comes back before any of
//! it reaches a project:
//!
//! - [`Orchestrator::generate_story_scenes`] - story idea to ordered scenes
//! - [`Orchestrator::generate_scene_preview`] - visual prompt to image data URI
//! - [`Orchestrator::generate_scene_previews`] - several previews, bounded fan-out
//! - [`Orchestrator::generate_project_idea`] - optional topic to a project suggestion

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod directive;
mod extraction;
mod orchestrator;
mod policy;
mod response;
mod schema;

pub use directive::{idea_directive, story_directive};
pub use extraction::{parse_json, strip_code_fences};
pub use orchestrator::{Orchestrator, PreviewOutcome, PreviewRequest};
pub use policy::PromptPolicy;
pub use schema::{project_idea_schema, scene_list_schema};
