#![cfg(feature = "gemini")]

// Conversions between Storyboard requests and the Gemini wire format.

use serde_json::json;
use storyboard_core::{AspectRatio, GenerateRequest, Output, ResponseFormat};
use storyboard_models::{GeminiRequest, GeminiResponse};

#[test]
fn test_json_request_carries_schema() -> anyhow::Result<()> {
    let schema = json!({"type": "ARRAY", "items": {"type": "OBJECT"}});
    let request = GenerateRequest::json("Write three scenes", schema.clone());

    let wire = serde_json::to_value(GeminiRequest::from_request(&request))?;

    assert_eq!(wire["contents"][0]["role"], "user");
    assert_eq!(wire["contents"][0]["parts"][0]["text"], "Write three scenes");
    assert_eq!(wire["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(wire["generationConfig"]["responseSchema"], schema);
    assert!(wire["generationConfig"].get("responseModalities").is_none());
    Ok(())
}

#[test]
fn test_image_request_sets_modalities_and_aspect_ratio() -> anyhow::Result<()> {
    let request = GenerateRequest::image("A fox at dawn", AspectRatio::Portrait);

    let wire = serde_json::to_value(GeminiRequest::from_request(&request))?;

    assert_eq!(wire["generationConfig"]["responseModalities"], json!(["IMAGE"]));
    assert_eq!(wire["generationConfig"]["imageConfig"]["aspectRatio"], "9:16");
    assert!(wire["generationConfig"].get("responseSchema").is_none());
    Ok(())
}

#[test]
fn test_plain_text_request_omits_generation_config() -> anyhow::Result<()> {
    let request = GenerateRequest {
        directive: "Hello".to_string(),
        format: ResponseFormat::Text,
        model: None,
        temperature: None,
    };

    let wire = serde_json::to_value(GeminiRequest::from_request(&request))?;

    assert!(wire.get("generationConfig").is_none());
    Ok(())
}

#[test]
fn test_response_text_and_inline_image() -> anyhow::Result<()> {
    let body = json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"text": "Here you go"},
                    {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                ]
            },
            "finishReason": "STOP"
        }]
    });

    let wire: GeminiResponse = serde_json::from_value(body)?;
    let response = wire.into_generate_response()?;

    assert_eq!(response.text().as_deref(), Some("Here you go"));
    assert_eq!(
        response.outputs[1],
        Output::Image {
            mime: Some("image/png".to_string()),
            data: b"hello".to_vec(),
        }
    );
    Ok(())
}

#[test]
fn test_response_without_candidates_is_empty() -> anyhow::Result<()> {
    let body = json!({"promptFeedback": {"blockReason": "SAFETY"}});

    let wire: GeminiResponse = serde_json::from_value(body)?;
    assert_eq!(wire.block_reason(), Some("SAFETY"));

    let response = wire.into_generate_response()?;
    assert!(response.outputs.is_empty());
    assert!(response.text().is_none());
    Ok(())
}

#[test]
fn test_invalid_inline_base64_is_malformed() -> anyhow::Result<()> {
    let body = json!({
        "candidates": [{
            "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "!!not base64!!"}}]}
        }]
    });

    let wire: GeminiResponse = serde_json::from_value(body)?;
    let err = wire.into_generate_response().unwrap_err();

    assert!(matches!(
        err.generation_kind(),
        Some(storyboard_error::GenerationErrorKind::MalformedResponse(_))
    ));
    Ok(())
}
