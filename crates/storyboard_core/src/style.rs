//! Closed enumerations describing a project's look and format.

use crate::AspectRatio;
use serde::{Deserialize, Serialize};

/// Target video format.
///
/// # Examples
///
/// ```
/// use storyboard_core::VideoType;
///
/// assert_eq!(VideoType::Short.to_string(), "SHORT");
/// assert_eq!("LONG".parse::<VideoType>().unwrap(), VideoType::Long);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum VideoType {
    /// Vertical short-form video (reels, shorts)
    #[default]
    Short,
    /// Horizontal long-form video
    Long,
}

impl VideoType {
    /// Human-readable description used in directives.
    pub fn description(&self) -> &'static str {
        match self {
            VideoType::Short => "a vertical 9:16 short-form video under 60 seconds",
            VideoType::Long => "a horizontal 16:9 long-form video of several minutes",
        }
    }

    /// Aspect ratio the format is displayed at.
    pub fn aspect_ratio(&self) -> AspectRatio {
        match self {
            VideoType::Short => AspectRatio::Portrait,
            VideoType::Long => AspectRatio::Landscape,
        }
    }
}

/// Animation style applied to every scene of a project.
///
/// # Examples
///
/// ```
/// use storyboard_core::AnimationStyle;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(AnimationStyle::iter().count(), 6);
/// assert_eq!(AnimationStyle::DisneyPixar.to_string(), "DISNEY_PIXAR");
/// assert_eq!(AnimationStyle::DisneyPixar.label(), "Disney Pixar");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum AnimationStyle {
    /// Glossy 3D feature-film animation
    #[default]
    #[serde(rename = "DISNEY_PIXAR")]
    #[strum(serialize = "DISNEY_PIXAR")]
    DisneyPixar,
    /// Japanese anime
    #[serde(rename = "ANIME")]
    #[strum(serialize = "ANIME")]
    Anime,
    /// Flat hand-drawn cartoon
    #[serde(rename = "CARTOON_2D")]
    #[strum(serialize = "CARTOON_2D")]
    Cartoon2D,
    /// Stop-motion clay
    #[serde(rename = "CLAYMATION")]
    #[strum(serialize = "CLAYMATION")]
    Claymation,
    /// Soft watercolor illustration
    #[serde(rename = "WATERCOLOR")]
    #[strum(serialize = "WATERCOLOR")]
    Watercolor,
    /// Neon-lit cyberpunk
    #[serde(rename = "CYBERPUNK")]
    #[strum(serialize = "CYBERPUNK")]
    Cyberpunk,
}

impl AnimationStyle {
    /// Short style name that every scene prompt must carry.
    pub fn label(&self) -> &'static str {
        match self {
            AnimationStyle::DisneyPixar => "Disney Pixar",
            AnimationStyle::Anime => "Anime",
            AnimationStyle::Cartoon2D => "2D Cartoon",
            AnimationStyle::Claymation => "Claymation",
            AnimationStyle::Watercolor => "Watercolor",
            AnimationStyle::Cyberpunk => "Cyberpunk",
        }
    }

    /// Longer rendering description used in directives.
    pub fn description(&self) -> &'static str {
        match self {
            AnimationStyle::DisneyPixar => {
                "Disney Pixar 3D animation, expressive characters, cinematic lighting, vibrant colors"
            }
            AnimationStyle::Anime => {
                "Anime style, cel shading, detailed backgrounds, dynamic poses"
            }
            AnimationStyle::Cartoon2D => {
                "2D Cartoon style, bold outlines, flat colors, playful shapes"
            }
            AnimationStyle::Claymation => {
                "Claymation stop-motion style, handmade clay textures, miniature sets"
            }
            AnimationStyle::Watercolor => {
                "Watercolor illustration style, soft washes, paper texture, gentle palette"
            }
            AnimationStyle::Cyberpunk => {
                "Cyberpunk style, neon lights, rain-soaked streets, high-tech atmosphere"
            }
        }
    }
}
