//! Response schemas for structured output.
//!
//! Gemini takes an OpenAPI-subset schema with upper-case type names.

use serde_json::{Value, json};
use storyboard_core::{AnimationStyle, VideoType};
use strum::IntoEnumIterator;

/// Ordered array of scene records.
pub fn scene_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "sceneNumber": { "type": "INTEGER" },
                "script": { "type": "STRING", "description": "Dialogue or voiceover for the scene" },
                "visualPrompt": {
                    "type": "STRING",
                    "description": "Self-contained image prompt restating character features and style"
                },
                "duration": { "type": "STRING", "description": "Duration label such as 3s" }
            },
            "required": ["sceneNumber", "script", "visualPrompt", "duration"],
            "propertyOrdering": ["sceneNumber", "script", "visualPrompt", "duration"]
        }
    })
}

/// Project suggestion with the two closed enumerations and 2-4 characters.
pub fn project_idea_schema() -> Value {
    let types: Vec<String> = VideoType::iter().map(|t| t.to_string()).collect();
    let styles: Vec<String> = AnimationStyle::iter().map(|s| s.to_string()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "storyIdea": { "type": "STRING" },
            "type": { "type": "STRING", "enum": types },
            "style": { "type": "STRING", "enum": styles },
            "characters": {
                "type": "ARRAY",
                "minItems": 2,
                "maxItems": 4,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "features": { "type": "STRING" },
                        "personality": { "type": "STRING" }
                    },
                    "required": ["name", "description", "features"]
                }
            }
        },
        "required": ["name", "storyIdea", "type", "style", "characters"]
    })
}
