//! Wire shapes of structured responses and their validation.

use serde::Deserialize;
use serde_json::Value;
use storyboard_core::{AnimationStyle, Character, IdIssuer, ProjectIdea, Scene, VideoType};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardError, StoryboardResult};

/// One scene as returned by the model; every field is checked before use.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SceneRecord {
    #[serde(default)]
    scene_number: Option<i64>,
    #[serde(default)]
    script: Option<String>,
    #[serde(default)]
    visual_prompt: Option<String>,
    #[serde(default)]
    duration: Option<Value>,
}

impl SceneRecord {
    /// Validate the record and turn it into a scene with a fresh identifier.
    pub(crate) fn into_scene(self, index: usize, issuer: &dyn IdIssuer) -> StoryboardResult<Scene> {
        let scene_number = self
            .scene_number
            .ok_or_else(|| malformed(format!("scene {} has no sceneNumber", index)))?;
        let scene_number = u32::try_from(scene_number)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                malformed(format!(
                    "scene {} has invalid sceneNumber {}",
                    index, scene_number
                ))
            })?;

        let script = required_text(self.script, "script", scene_number)?;
        let visual_prompt = required_text(self.visual_prompt, "visualPrompt", scene_number)?;
        let duration = match self.duration {
            Some(Value::String(label)) if !label.trim().is_empty() => label.trim().to_string(),
            // Bare seconds
            Some(Value::Number(n)) => format!("{}s", n),
            _ => return Err(malformed(format!("scene {} has no duration", scene_number))),
        };

        Ok(Scene {
            id: issuer.issue(),
            scene_number,
            script,
            visual_prompt,
            duration,
            image_data: None,
            is_generating_image: false,
        })
    }
}

/// A project suggestion as returned by the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdeaRecord {
    name: String,
    story_idea: String,
    #[serde(rename = "type")]
    video_type: String,
    style: String,
    #[serde(default)]
    characters: Vec<CharacterRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CharacterRecord {
    name: String,
    description: String,
    features: String,
    #[serde(default)]
    personality: Option<String>,
}

impl IdeaRecord {
    /// Validate enums and characters; every character gets a fresh identifier.
    pub(crate) fn into_idea(self, issuer: &dyn IdIssuer) -> StoryboardResult<ProjectIdea> {
        let video_type: VideoType = self
            .video_type
            .parse()
            .map_err(|_| malformed(format!("unknown video type '{}'", self.video_type)))?;
        let style: AnimationStyle = self
            .style
            .parse()
            .map_err(|_| malformed(format!("unknown animation style '{}'", self.style)))?;

        if self.name.trim().is_empty() {
            return Err(malformed("project idea has a blank name"));
        }
        if self.characters.is_empty() {
            return Err(malformed("project idea has no characters"));
        }
        if !(2..=4).contains(&self.characters.len()) {
            tracing::warn!(
                count = self.characters.len(),
                "Project idea character count outside 2-4"
            );
        }

        let characters = self
            .characters
            .into_iter()
            .map(|c| Character {
                id: issuer.issue(),
                name: c.name,
                description: c.description,
                features: c.features,
                personality: c.personality.filter(|p| !p.trim().is_empty()),
            })
            .collect();

        Ok(ProjectIdea {
            name: self.name.trim().to_string(),
            story_idea: self.story_idea,
            video_type,
            style,
            characters,
        })
    }
}

fn required_text(
    value: Option<String>,
    field: &str,
    scene_number: u32,
) -> StoryboardResult<String> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| malformed(format!("scene {} has a blank {}", scene_number, field)))
}

#[track_caller]
pub(crate) fn malformed(message: impl Into<String>) -> StoryboardError {
    GenerationError::new(GenerationErrorKind::MalformedResponse(message.into())).into()
}
