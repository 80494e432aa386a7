//! Character list editing and the JSON interchange format.
//!
//! The interchange format is `{"characters": [...]}`, where each element has
//! `name`, `description` and `features`, plus optional `id` and `personality`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use storyboard_core::{Character, CharacterDraft, IdIssuer};
use storyboard_error::{EditorError, EditorErrorKind, StoryboardResult};

#[derive(Debug, Deserialize)]
struct ImportedCharacter {
    #[serde(default)]
    id: Option<String>,
    name: String,
    description: String,
    features: String,
    #[serde(default)]
    personality: Option<String>,
}

#[derive(Serialize)]
struct CharacterFile<'a> {
    characters: &'a [Character],
}

/// Append characters parsed from interchange JSON.
///
/// Missing identifiers are issued. An identifier that collides with an
/// existing character or an earlier imported one is replaced.
///
/// # Errors
///
/// - `Parse` if the text is not valid JSON
/// - `Schema` if `characters` is missing or not an array, or an element
///   lacks a required field
///
/// # Examples
///
/// ```
/// use storyboard_core::{SequentialIssuer, default_characters};
/// use storyboard_editor::import_characters;
///
/// let text = r#"{"characters": [{"name": "Bo", "description": "A bear", "features": "brown fur"}]}"#;
/// let merged = import_characters(&default_characters(), text, &SequentialIssuer::new("c")).unwrap();
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged[2].id, "c-1");
/// ```
#[tracing::instrument(skip_all, fields(existing = existing.len(), text_len = json_text.len()))]
pub fn import_characters(
    existing: &[Character],
    json_text: &str,
    issuer: &dyn IdIssuer,
) -> StoryboardResult<Vec<Character>> {
    let document: Value = serde_json::from_str(json_text)
        .map_err(|e| EditorError::new(EditorErrorKind::Parse(e.to_string())))?;

    let elements = document
        .get("characters")
        .ok_or_else(|| schema("missing top-level `characters` field"))?
        .as_array()
        .ok_or_else(|| schema("`characters` must be an array"))?;

    let mut taken: HashSet<String> = existing.iter().map(|c| c.id.clone()).collect();
    let mut merged = existing.to_vec();

    for (index, element) in elements.iter().enumerate() {
        let imported = ImportedCharacter::deserialize(element)
            .map_err(|e| schema(format!("character {}: {}", index, e)))?;

        let id = match imported.id.filter(|id| !id.trim().is_empty()) {
            Some(id) if !taken.contains(&id) => id,
            Some(id) => {
                let fresh = fresh_id(issuer, &taken);
                tracing::warn!(old = %id, new = %fresh, "Imported character id collides, reissued");
                fresh
            }
            None => fresh_id(issuer, &taken),
        };
        taken.insert(id.clone());

        merged.push(Character {
            id,
            name: imported.name,
            description: imported.description,
            features: imported.features,
            personality: imported.personality,
        });
    }

    tracing::info!(imported = elements.len(), "Imported characters");
    Ok(merged)
}

/// Serialize characters to pretty interchange JSON.
///
/// The output of this function imports back without changes.
pub fn export_characters(characters: &[Character]) -> StoryboardResult<String> {
    serde_json::to_string_pretty(&CharacterFile { characters })
        .map_err(|e| EditorError::new(EditorErrorKind::Serialize(e.to_string())).into())
}

/// Append a new character with a fresh identifier.
pub fn add_character(
    existing: &[Character],
    draft: CharacterDraft,
    issuer: &dyn IdIssuer,
) -> Vec<Character> {
    let taken: HashSet<String> = existing.iter().map(|c| c.id.clone()).collect();
    let mut characters = existing.to_vec();
    characters.push(Character::from_draft(fresh_id(issuer, &taken), draft));
    characters
}

/// Fields to replace on an existing character; `None` keeps the current value.
///
/// # Examples
///
/// ```
/// use storyboard_editor::CharacterPatch;
///
/// let patch = CharacterPatch::builder().features("red cap").build().unwrap();
/// assert!(patch.name.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_builder::Builder)]
#[builder(default, setter(into, strip_option))]
pub struct CharacterPatch {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New visual features
    pub features: Option<String>,
    /// New personality notes
    pub personality: Option<String>,
}

impl CharacterPatch {
    /// Creates a new builder for `CharacterPatch`.
    pub fn builder() -> CharacterPatchBuilder {
        CharacterPatchBuilder::default()
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Apply a patch to the character with identifier `id`; no-op if absent.
pub fn edit_character(existing: &[Character], id: &str, patch: &CharacterPatch) -> Vec<Character> {
    existing
        .iter()
        .map(|character| {
            if character.id != id {
                return character.clone();
            }
            let mut edited = character.clone();
            if let Some(name) = &patch.name {
                edited.name = name.clone();
            }
            if let Some(description) = &patch.description {
                edited.description = description.clone();
            }
            if let Some(features) = &patch.features {
                edited.features = features.clone();
            }
            if let Some(personality) = &patch.personality {
                edited.personality = Some(personality.clone()).filter(|p| !p.trim().is_empty());
            }
            edited
        })
        .collect()
}

/// Drop the character with identifier `id`; no-op if absent.
pub fn remove_character(existing: &[Character], id: &str) -> Vec<Character> {
    existing.iter().filter(|c| c.id != id).cloned().collect()
}

fn fresh_id(issuer: &dyn IdIssuer, taken: &HashSet<String>) -> String {
    loop {
        let id = issuer.issue();
        if !taken.contains(&id) {
            return id;
        }
    }
}

#[track_caller]
fn schema(message: impl Into<String>) -> EditorError {
    EditorError::new(EditorErrorKind::Schema(message.into()))
}
