//! AI-suggested project seeds.

use crate::{AnimationStyle, Character, ProjectDraft, VideoType};
use serde::{Deserialize, Serialize};

/// A non-persisted project suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    /// Suggested project name
    pub name: String,
    /// Suggested story idea
    pub story_idea: String,
    /// Suggested video format
    #[serde(rename = "type")]
    pub video_type: VideoType,
    /// Suggested animation style
    pub style: AnimationStyle,
    /// Suggested characters, with freshly issued identifiers
    pub characters: Vec<Character>,
}

impl ProjectIdea {
    /// Turn the suggestion into creation parameters for a new project.
    pub fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            name: self.name,
            video_type: self.video_type,
            style: self.style,
            characters: self.characters,
            scenes: Vec::new(),
            story_idea: self.story_idea,
        }
    }
}
