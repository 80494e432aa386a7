//! Core data types for the Storyboard video planning library.
//!
//! This crate provides the foundation data types shared by the store, the
//! orchestrator, the editor and the exporter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod id;
mod idea;
mod media;
mod project;
mod request;
mod scene;
mod style;

pub use character::{Character, CharacterDraft, CharacterDraftBuilder, default_characters};
pub use id::{IdIssuer, SequentialIssuer, UuidIssuer};
pub use idea::ProjectIdea;
pub use media::{DataUri, DataUriError, GeneratedImage};
pub use project::{Project, ProjectDraft, ProjectDraftBuilder, ProjectDraftBuilderError};
pub use request::{AspectRatio, GenerateRequest, GenerateResponse, Output, ResponseFormat};
pub use scene::Scene;
pub use style::{AnimationStyle, VideoType};
