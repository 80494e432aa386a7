//! Request and response types for the generation capability.

use serde::{Deserialize, Serialize};

/// Image aspect ratio requested from the generation capability.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum AspectRatio {
    /// 16:9
    #[default]
    #[display("16:9")]
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16
    #[display("9:16")]
    #[serde(rename = "9:16")]
    Portrait,
    /// 1:1
    #[display("1:1")]
    #[serde(rename = "1:1")]
    Square,
}

/// What kind of payload a request asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ResponseFormat {
    /// Free-form text
    Text,
    /// JSON constrained by a response schema
    Json {
        /// Schema the response must match
        schema: serde_json::Value,
    },
    /// A generated image
    Image {
        /// Requested aspect ratio
        aspect_ratio: AspectRatio,
    },
}

/// A single request to the generation capability.
///
/// # Examples
///
/// ```
/// use storyboard_core::{GenerateRequest, ResponseFormat};
///
/// let request = GenerateRequest {
///     directive: "Describe a sunset".to_string(),
///     format: ResponseFormat::Text,
///     model: None,
///     temperature: Some(0.7),
/// };
///
/// assert!(!request.is_image());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Instruction text describing task, constraints and output shape
    pub directive: String,
    /// Requested payload kind
    pub format: ResponseFormat,
    /// Model override; the driver picks its default for the format when `None`
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    /// Request constrained JSON output.
    pub fn json(directive: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            directive: directive.into(),
            format: ResponseFormat::Json { schema },
            model: None,
            temperature: None,
        }
    }

    /// Request a single image.
    pub fn image(prompt: impl Into<String>, aspect_ratio: AspectRatio) -> Self {
        Self {
            directive: prompt.into(),
            format: ResponseFormat::Image { aspect_ratio },
            model: None,
            temperature: None,
        }
    }

    /// Whether this request asks for an image.
    pub fn is_image(&self) -> bool {
        matches!(self.format, ResponseFormat::Image { .. })
    }
}

/// One part of a generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Text output (JSON arrives as text)
    Text(String),
    /// Generated image
    Image {
        /// MIME type of the image
        mime: Option<String>,
        /// Binary image data
        data: Vec<u8>,
    },
}

/// The unified response object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Outputs in the order the service returned them
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenation of all text outputs, or `None` if there are none.
    pub fn text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .outputs
            .iter()
            .filter_map(|output| match output {
                Output::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.concat())
        }
    }

    /// The first image output, if any.
    pub fn first_image(&self) -> Option<(Option<&str>, &[u8])> {
        self.outputs.iter().find_map(|output| match output {
            Output::Image { mime, data } => Some((mime.as_deref(), data.as_slice())),
            _ => None,
        })
    }
}
