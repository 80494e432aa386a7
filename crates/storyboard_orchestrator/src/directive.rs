//! Directive text sent to the generation capability.

use storyboard_core::{AnimationStyle, Character, VideoType};

/// Directive for turning a story idea into scenes.
///
/// The directive carries the target format, the style label, and one line
/// per character, and requires every scene prompt to restate the concrete
/// visual features of each character in it plus the style.
///
/// # Examples
///
/// ```
/// use storyboard_core::{AnimationStyle, VideoType, default_characters};
/// use storyboard_orchestrator::story_directive;
///
/// let directive = story_directive(
///     "A fox and an owl search for the lost moon.",
///     &default_characters(),
///     AnimationStyle::Anime,
///     VideoType::Short,
/// );
/// assert!(directive.contains("vertical 9:16"));
/// assert!(directive.contains("Anime"));
/// assert!(directive.contains("- Leo:"));
/// ```
pub fn story_directive(
    idea: &str,
    characters: &[Character],
    style: AnimationStyle,
    video_type: VideoType,
) -> String {
    let roster = if characters.is_empty() {
        "(no named characters; invent none beyond what the story needs)".to_string()
    } else {
        characters
            .iter()
            .map(Character::directive_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are a storyboard writer for animated videos.\n\
         Write the scene-by-scene script for {format}.\n\
         Animation style: {label} ({style_description}).\n\n\
         Story idea:\n{idea}\n\n\
         Characters:\n{roster}\n\n\
         Rules:\n\
         1. Number scenes from 1 in story order.\n\
         2. Each scene has a short script line (dialogue or voiceover) and a duration label such as \"3s\".\n\
         3. Each visualPrompt must be self-contained: for every character appearing in the scene, \
         restate their concrete visual features word for word from the list above. \
         Never refer to a character only by name.\n\
         4. Each visualPrompt must end by restating the style as \"{label} style\".\n\
         Return only the JSON array of scenes.",
        format = video_type.description(),
        label = style.label(),
        style_description = style.description(),
        idea = idea.trim(),
        roster = roster,
    )
}

/// Directive for suggesting a new project.
///
/// Without a topic the model is asked to invent a trending concept.
///
/// # Examples
///
/// ```
/// use storyboard_orchestrator::idea_directive;
///
/// assert!(idea_directive(Some("space whales")).contains("space whales"));
/// assert!(idea_directive(None).contains("trending"));
/// ```
pub fn idea_directive(topic: Option<&str>) -> String {
    let subject = match topic.map(str::trim).filter(|t| !t.is_empty()) {
        Some(topic) => format!("Base the concept on this topic: {}.", topic),
        None => "Invent an original concept that fits what is currently trending in short animated videos."
            .to_string(),
    };

    let types = enum_names::<VideoType>();
    let styles = enum_names::<AnimationStyle>();

    format!(
        "You are a creative director for animated videos.\n\
         {subject}\n\
         Suggest a project: a catchy name, a story idea of two or three sentences, \
         a video type (one of {types}), an animation style (one of {styles}), \
         and two to four characters. Give every character a name, a one-line description, \
         concrete visual features (colors, clothing, distinctive marks) and an optional personality.\n\
         Return only the JSON object."
    )
}

fn enum_names<T>() -> String
where
    T: strum::IntoEnumIterator + std::fmt::Display,
{
    T::iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
