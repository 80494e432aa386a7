#![cfg(feature = "gemini")]

use storyboard_core::{AspectRatio, GenerateRequest};
use storyboard_error::GenerationErrorKind;
use storyboard_interface::GenerationDriver;
use storyboard_models::{GeminiClient, GeminiConfig};
use storyboard_rate_limit::LimitConfig;

#[tokio::test]
async fn test_missing_credential_fails_before_request() -> anyhow::Result<()> {
    // Unroutable base URL: reaching the network would surface as Upstream
    let config = GeminiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        ..Default::default()
    };
    let client = GeminiClient::with_api_key(None, config, LimitConfig::default())?;

    assert!(!client.has_credential());
    assert_eq!(client.credential_hint(), "GEMINI_API_KEY");

    let err = client
        .generate(&GenerateRequest::image("a fox", AspectRatio::Landscape))
        .await
        .unwrap_err();

    assert_eq!(
        err.generation_kind(),
        Some(&GenerationErrorKind::MissingCredential("GEMINI_API_KEY".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn test_model_selection_follows_format() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key(
        Some("test-key".to_string()),
        GeminiConfig::default(),
        LimitConfig::default(),
    )?;

    let image = GenerateRequest::image("a fox", AspectRatio::Landscape);
    let json = GenerateRequest::json("scenes", serde_json::json!({"type": "ARRAY"}));
    let mut pinned = json.clone();
    pinned.model = Some("gemini-2.5-pro".to_string());

    assert_eq!(client.model_for(&image), "gemini-2.5-flash-image");
    assert_eq!(client.model_for(&json), "gemini-2.5-flash");
    assert_eq!(client.model_for(&pinned), "gemini-2.5-pro");
    assert_eq!(client.provider_name(), "gemini");
    Ok(())
}

#[cfg(feature = "api")]
#[tokio::test]
async fn test_live_json_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new(GeminiConfig::default(), LimitConfig::default())?;
    let schema = serde_json::json!({
        "type": "OBJECT",
        "properties": {"title": {"type": "STRING"}},
        "required": ["title"]
    });

    let response = client
        .generate(&GenerateRequest::json("Invent a title for a short fox story.", schema))
        .await?;
    let text = response.text().unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(&text)?;

    assert!(value["title"].is_string());
    Ok(())
}
