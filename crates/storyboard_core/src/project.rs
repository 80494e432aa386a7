//! Projects, the root entity.

use crate::{AnimationStyle, Character, Scene, VideoType, default_characters};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A user's single animated-video planning unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier, unique within the store
    pub id: String,
    /// Display name
    pub name: String,
    /// Target video format
    #[serde(rename = "type")]
    pub video_type: VideoType,
    /// Animation style
    pub style: AnimationStyle,
    /// Creation time in milliseconds since the Unix epoch
    pub created_at: i64,
    /// Characters, in display order
    pub characters: Vec<Character>,
    /// Scenes; ordering is by scene number, not list position
    pub scenes: Vec<Scene>,
    /// Free-text story idea
    #[serde(default)]
    pub story_idea: String,
}

impl Project {
    /// Assemble a project from a draft.
    pub fn from_draft(id: impl Into<String>, created_at: i64, draft: ProjectDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            video_type: draft.video_type,
            style: draft.style,
            created_at,
            characters: draft.characters,
            scenes: draft.scenes,
            story_idea: draft.story_idea,
        }
    }

    /// Creation time as a UTC timestamp.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at).single()
    }

    /// Scenes sorted by scene number (stable for equal numbers).
    pub fn scenes_in_order(&self) -> Vec<&Scene> {
        let mut scenes: Vec<&Scene> = self.scenes.iter().collect();
        scenes.sort_by_key(|scene| scene.scene_number);
        scenes
    }

    /// Look up a scene by identifier.
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.id == id)
    }
}

/// Creation parameters of a project.
///
/// # Examples
///
/// ```
/// use storyboard_core::{AnimationStyle, ProjectDraft, VideoType};
///
/// let draft = ProjectDraft::builder().name("Test").build().unwrap();
/// assert_eq!(draft.video_type, VideoType::Short);
/// assert_eq!(draft.style, AnimationStyle::DisneyPixar);
/// assert_eq!(draft.characters.len(), 2);
/// assert!(draft.scenes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ProjectDraft {
    /// Display name (must not be blank)
    pub name: String,
    /// Target video format
    #[builder(default)]
    pub video_type: VideoType,
    /// Animation style
    #[builder(default)]
    pub style: AnimationStyle,
    /// Initial characters
    #[builder(default = "default_characters()")]
    pub characters: Vec<Character>,
    /// Initial scenes
    #[builder(default)]
    pub scenes: Vec<Scene>,
    /// Free-text story idea
    #[builder(default)]
    pub story_idea: String,
}

impl ProjectDraft {
    /// Creates a new builder for `ProjectDraft`.
    pub fn builder() -> ProjectDraftBuilder {
        ProjectDraftBuilder::default()
    }
}

impl ProjectDraftBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.name {
            Some(name) if name.trim().is_empty() => Err("Project name must not be blank".into()),
            _ => Ok(()),
        }
    }
}
