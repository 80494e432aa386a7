//! Character definitions.

use serde::{Deserialize, Serialize};

/// A reusable visual and personality definition referenced across scenes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Identifier, unique within the owning project
    pub id: String,
    /// Display name
    pub name: String,
    /// Who the character is
    pub description: String,
    /// Concrete visual features restated in every prompt the character appears in
    pub features: String,
    /// Optional personality notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
}

impl Character {
    /// Create a character from a draft and an identifier.
    pub fn from_draft(id: impl Into<String>, draft: CharacterDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            description: draft.description,
            features: draft.features,
            personality: draft.personality,
        }
    }

    /// One-line summary embedded in generation directives.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_core::default_characters;
    ///
    /// let line = default_characters()[0].directive_line();
    /// assert!(line.starts_with("- Leo:"));
    /// assert!(line.contains("Visual features:"));
    /// ```
    pub fn directive_line(&self) -> String {
        let mut line = format!(
            "- {}: {}. Visual features: {}.",
            self.name, self.description, self.features
        );
        if let Some(personality) = self.personality.as_deref().filter(|p| !p.trim().is_empty()) {
            line.push_str(&format!(" Personality: {}.", personality));
        }
        line
    }
}

/// Character fields before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CharacterDraft {
    /// Display name
    pub name: String,
    /// Who the character is
    pub description: String,
    /// Concrete visual features
    pub features: String,
    /// Optional personality notes
    #[builder(default)]
    #[serde(default)]
    pub personality: Option<String>,
}

impl CharacterDraft {
    /// Creates a new builder for `CharacterDraft`.
    pub fn builder() -> CharacterDraftBuilder {
        CharacterDraftBuilder::default()
    }
}

/// The two characters a new project starts with.
pub fn default_characters() -> Vec<Character> {
    vec![
        Character {
            id: "default-1".to_string(),
            name: "Leo".to_string(),
            description: "A curious young fox who dreams of exploring the world".to_string(),
            features: "small orange fox, big green eyes, white-tipped tail, blue scarf".to_string(),
            personality: Some("brave, cheerful, a little reckless".to_string()),
        },
        Character {
            id: "default-2".to_string(),
            name: "Mia".to_string(),
            description: "A wise old owl and Leo's loyal friend".to_string(),
            features: "round grey owl, large amber eyes, tiny round spectacles, brown feathered cape"
                .to_string(),
            personality: Some("calm, patient, witty".to_string()),
        },
    ]
}
