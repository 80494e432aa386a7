//! Configuration loading.

use storyboard::{ConfigErrorKind, PromptPolicy, StoryboardConfig};
use tempfile::TempDir;

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = StoryboardConfig::from_toml_str("")?;

    assert_eq!(config.gemini.text_model, "gemini-2.5-flash");
    assert_eq!(config.gemini.image_model, "gemini-2.5-flash-image");
    assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.gemini.timeout_secs, 120);
    assert_eq!(config.limits.rpm, Some(10));
    assert_eq!(config.limits.max_concurrent, Some(2));
    assert_eq!(config.storage.slot, "projects.json");
    assert!(config.storage.data_dir.is_none());
    assert_eq!(config.orchestrator.prompt_policy, PromptPolicy::Repair);
    assert_eq!(config.preview_concurrency(), 2);
    Ok(())
}

#[test]
fn test_overrides_replace_only_given_keys() -> anyhow::Result<()> {
    let config = StoryboardConfig::from_toml_str(
        r#"
        [limits]
        max_concurrent = 4

        [storage]
        data_dir = "/tmp/storyboard-test"

        [orchestrator]
        prompt_policy = "strict"
        "#,
    )?;

    assert_eq!(config.limits.max_concurrent, Some(4));
    assert_eq!(config.limits.rpm, Some(10));
    assert_eq!(
        config.storage.resolved_data_dir(),
        std::path::PathBuf::from("/tmp/storyboard-test")
    );
    assert_eq!(config.orchestrator.prompt_policy, PromptPolicy::Strict);
    assert_eq!(config.gemini.text_model, "gemini-2.5-flash");
    Ok(())
}

#[test]
fn test_from_file_and_bad_values() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("storyboard.toml");
    std::fs::write(&path, "[gemini]\nimage_model = \"imagen-4\"\n")?;

    let config = StoryboardConfig::from_file(&path)?;
    assert_eq!(config.gemini.image_model, "imagen-4");

    let bad = StoryboardConfig::from_toml_str("[orchestrator]\nprompt_policy = \"lenient\"\n")
        .unwrap_err();
    assert!(matches!(bad.config_kind(), Some(ConfigErrorKind::Invalid(_))));
    Ok(())
}
