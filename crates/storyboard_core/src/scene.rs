//! Scene records.

use serde::{Deserialize, Serialize};

/// One shot of a project's script with its own narration and image prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Identifier, unique within the owning project
    pub id: String,
    /// 1-based position in the script
    pub scene_number: u32,
    /// Dialogue or voiceover
    pub script: String,
    /// Self-contained image-generation prompt
    pub visual_prompt: String,
    /// Free-form duration label, e.g. "3s"
    pub duration: String,
    /// Generated preview image as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// Whether a preview request for this scene is in flight
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_generating_image: bool,
}

impl Scene {
    /// Whether a preview image has been generated.
    pub fn has_image(&self) -> bool {
        self.image_data.is_some()
    }
}
