//! Gemini `generateContent` wire types and their conversions.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use storyboard_core::{GenerateRequest, GenerateResponse, Output, ResponseFormat};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation turns; Storyboard always sends a single user turn
    pub contents: Vec<Content>,
    /// Output constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Turn parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Text or inline binary content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Base64 binary payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Base64 data
    pub data: String,
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// e.g. "application/json"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Schema for structured output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// e.g. ["IMAGE"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    /// Image output parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

/// Image output parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// e.g. "16:9"
    pub aspect_ratio: String,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Candidate completions
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Set when the prompt itself was blocked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// One candidate completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// e.g. "STOP", "SAFETY"
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Prompt-level feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Why the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GeminiRequest {
    /// Build the wire request for a Storyboard request.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_core::{AspectRatio, GenerateRequest};
    /// use storyboard_models::GeminiRequest;
    ///
    /// let wire = GeminiRequest::from_request(&GenerateRequest::image("a fox", AspectRatio::Landscape));
    /// let config = wire.generation_config.unwrap();
    /// assert_eq!(config.image_config.unwrap().aspect_ratio, "16:9");
    /// ```
    pub fn from_request(req: &GenerateRequest) -> Self {
        let mut config = GenerationConfig {
            temperature: req.temperature,
            ..Default::default()
        };

        match &req.format {
            ResponseFormat::Text => {}
            ResponseFormat::Json { schema } => {
                config.response_mime_type = Some("application/json".to_string());
                config.response_schema = Some(schema.clone());
            }
            ResponseFormat::Image { aspect_ratio } => {
                config.response_modalities = Some(vec!["IMAGE".to_string()]);
                config.image_config = Some(ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                });
            }
        }

        let generation_config = if config == GenerationConfig::default() {
            None
        } else {
            Some(config)
        };

        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(req.directive.clone()),
                    inline_data: None,
                }],
            }],
            generation_config,
        }
    }
}

impl GeminiResponse {
    /// Reason the prompt was blocked, if any.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }

    /// Flatten the first candidate's parts into Storyboard outputs.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if an inline image is not valid base64.
    pub fn into_generate_response(self) -> StoryboardResult<GenerateResponse> {
        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default();

        let mut outputs = Vec::with_capacity(parts.len());
        for part in parts {
            if let Some(text) = part.text {
                outputs.push(Output::Text(text));
            }
            if let Some(inline) = part.inline_data {
                let data = STANDARD.decode(inline.data.as_bytes()).map_err(|e| {
                    GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                        "inline image is not valid base64: {}",
                        e
                    )))
                })?;
                outputs.push(Output::Image {
                    mime: inline.mime_type,
                    data,
                });
            }
        }

        Ok(GenerateResponse { outputs })
    }
}
