//! End-to-end flows through the studio with a scripted driver.

use serde_json::json;
use std::io::{Cursor, Read};
use std::sync::Arc;
use std::time::Duration;
use storyboard::{
    EditorErrorKind, InMemoryPersistence, MockDriver, MockResponse, ProjectDraft, SequentialIssuer,
    StorageErrorKind, StoryboardConfig, Studio, WorkflowErrorKind,
};
use tempfile::TempDir;

fn scenes_body() -> String {
    json!([
        {"sceneNumber": 1, "script": "Leo: Look!", "visualPrompt": "A small orange fox, blue scarf, points at the sky. Disney Pixar style.", "duration": "3s"},
        {"sceneNumber": 2, "script": "Mia: The moon!", "visualPrompt": "A round grey owl, tiny round spectacles, gazes up. Disney Pixar style.", "duration": "4s"}
    ])
    .to_string()
}

async fn studio(mock: Arc<MockDriver>) -> anyhow::Result<(Studio, Arc<InMemoryPersistence>)> {
    let persistence = Arc::new(InMemoryPersistence::new());
    let config = StoryboardConfig::from_toml_str("")?;
    let studio = Studio::with_parts(
        persistence.clone(),
        mock,
        Arc::new(SequentialIssuer::new("id")),
        &config,
    )
    .await?;
    Ok((studio, persistence))
}

fn draft() -> ProjectDraft {
    ProjectDraft::builder()
        .name("Moon Hunt")
        .story_idea("Leo spots the moon. Mia explains it. They chase it.")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_script_preview_and_export() -> anyhow::Result<()> {
    let mock = Arc::new(MockDriver::new(vec![
        MockResponse::Text(scenes_body()),
        MockResponse::Image { mime: Some("image/png".to_string()), data: b"png".to_vec() },
    ]));
    let (studio, _) = studio(mock.clone()).await?;
    let project = studio.create_project(draft()).await?;

    let project = studio.generate_script(&project.id).await?;
    assert_eq!(project.scenes.len(), 2);

    let first = project.scenes_in_order()[0].id.clone();
    let project = studio.generate_preview(&project.id, &first).await?;
    let scene = project.scene(&first).unwrap();
    assert_eq!(scene.image_data.as_deref(), Some("data:image/png;base64,cG5n"));
    assert!(!scene.is_generating_image);

    let temp_dir = TempDir::new()?;
    let path = studio.export(&project.id, temp_dir.path()).await?;
    assert!(path.ends_with("moon_hunt_assets.zip"));

    let bytes = std::fs::read(&path)?;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    assert_eq!(archive.len(), 2);
    let mut manifest = String::new();
    archive.by_name("script.txt")?.read_to_string(&mut manifest)?;
    assert!(manifest.contains("(no image generated)"));
    assert_eq!(mock.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_preview_clears_pending() -> anyhow::Result<()> {
    let mock = Arc::new(MockDriver::new(vec![
        MockResponse::Text(scenes_body()),
        MockResponse::Empty,
    ]));
    let (studio, _) = studio(mock).await?;
    let project = studio.create_project(draft()).await?;
    let project = studio.generate_script(&project.id).await?;
    let scene_id = project.scenes[0].id.clone();

    assert!(studio.generate_preview(&project.id, &scene_id).await.is_err());

    let stored = studio.store().get(&project.id).await?;
    let scene = stored.scene(&scene_id).unwrap();
    assert!(!scene.is_generating_image);
    assert!(scene.image_data.is_none());
    Ok(())
}

#[tokio::test]
async fn test_preview_after_delete_is_not_found() -> anyhow::Result<()> {
    let mock = Arc::new(
        MockDriver::new(vec![
            MockResponse::Text(scenes_body()),
            MockResponse::Image { mime: None, data: b"png".to_vec() },
        ])
        .with_delay(Duration::from_millis(50)),
    );
    let (studio, _) = studio(mock).await?;
    let project = studio.create_project(draft()).await?;
    let project = studio.generate_script(&project.id).await?;
    let scene_id = project.scenes[0].id.clone();

    let (preview, deleted) = tokio::join!(studio.generate_preview(&project.id, &scene_id), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        studio.store().delete(&project.id).await
    });

    assert!(deleted.is_ok());
    assert!(matches!(
        preview.unwrap_err().storage_kind(),
        Some(StorageErrorKind::NotFound(_))
    ));
    assert!(studio.store().list().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_all_previews_report_each_scene() -> anyhow::Result<()> {
    let mock = Arc::new(MockDriver::new(vec![
        MockResponse::Text(scenes_body()),
        MockResponse::Image { mime: None, data: b"one".to_vec() },
        MockResponse::Error(storyboard::GenerationErrorKind::upstream(Some(429), "quota")),
    ]));
    let (studio, _) = studio(mock).await?;
    let project = studio.create_project(draft()).await?;
    let project = studio.generate_script(&project.id).await?;

    let (updated, outcomes) = studio.generate_all_previews(&project.id).await?;

    assert_eq!(outcomes.len(), 2);
    let with_images = updated.scenes.iter().filter(|s| s.has_image()).count();
    let failures = outcomes.iter().filter(|o| o.result.is_err()).count();
    assert_eq!(with_images + failures, 2);
    assert!(updated.scenes.iter().all(|s| !s.is_generating_image));
    Ok(())
}

#[tokio::test]
async fn test_malformed_import_leaves_store_unchanged() -> anyhow::Result<()> {
    let (studio, persistence) = studio(Arc::new(MockDriver::new(vec![MockResponse::Empty]))).await?;
    let project = studio.create_project(draft()).await?;
    let before = studio.store().list().await;
    let saves = persistence.save_count();

    let err = studio
        .import_characters(&project.id, "{\"characters\": [")
        .await
        .unwrap_err();

    assert!(matches!(err.editor_kind(), Some(EditorErrorKind::Parse(_))));
    assert_eq!(studio.store().list().await, before);
    assert_eq!(persistence.save_count(), saves);
    Ok(())
}

#[tokio::test]
async fn test_script_requires_story_idea() -> anyhow::Result<()> {
    let mock = Arc::new(MockDriver::new_text(scenes_body()));
    let (studio, _) = studio(mock.clone()).await?;
    let project = studio
        .create_project(ProjectDraft::builder().name("Blank").build()?)
        .await?;

    let err = studio.generate_script(&project.id).await.unwrap_err();
    assert!(matches!(
        err.workflow_kind(),
        Some(WorkflowErrorKind::MissingStoryIdea(name)) if name == "Blank"
    ));
    assert_eq!(mock.call_count(), 0);
    Ok(())
}

fn slow_driver(delay_ms: u64) -> Arc<MockDriver> {
    Arc::new(
        MockDriver::new(vec![
            MockResponse::Text(scenes_body()),
            MockResponse::Image { mime: None, data: b"png".to_vec() },
        ])
        .with_delay(Duration::from_millis(delay_ms)),
    )
}

#[tokio::test]
async fn test_failed_image_commit_clears_pending() -> anyhow::Result<()> {
    let (studio, persistence) = studio(slow_driver(200)).await?;
    let project = studio.create_project(draft()).await?;
    let project = studio.generate_script(&project.id).await?;
    let scene_id = project.scenes[0].id.clone();

    let (preview, ()) = tokio::join!(studio.generate_preview(&project.id, &scene_id), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        persistence.set_fail_writes(true);
    });

    assert!(matches!(
        preview.unwrap_err().storage_kind(),
        Some(StorageErrorKind::Write(_))
    ));
    let stored = studio.store().get(&project.id).await?;
    let scene = stored.scene(&scene_id).unwrap();
    assert!(!scene.is_generating_image);
    assert!(scene.image_data.is_none());

    persistence.set_fail_writes(false);
    let retried = studio.generate_preview(&project.id, &scene_id).await?;
    assert!(retried.scene(&scene_id).unwrap().has_image());
    Ok(())
}

#[tokio::test]
async fn test_failed_batch_commit_clears_pending() -> anyhow::Result<()> {
    let (studio, persistence) = studio(slow_driver(200)).await?;
    let project = studio.create_project(draft()).await?;
    let project = studio.generate_script(&project.id).await?;

    let (batch, ()) = tokio::join!(studio.generate_all_previews(&project.id), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        persistence.set_fail_writes(true);
    });

    assert!(batch.is_err());
    let stored = studio.store().get(&project.id).await?;
    assert!(stored.scenes.iter().all(|s| !s.is_generating_image && !s.has_image()));
    Ok(())
}

#[tokio::test]
async fn test_pending_scene_refuses_second_preview() -> anyhow::Result<()> {
    let mock = slow_driver(100);
    let (studio, _) = studio(mock.clone()).await?;
    let project = studio.create_project(draft()).await?;
    let project = studio.generate_script(&project.id).await?;
    let scene_id = project.scenes[0].id.clone();

    let (first, second) = tokio::join!(studio.generate_preview(&project.id, &scene_id), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        studio.generate_preview(&project.id, &scene_id).await
    });

    assert!(first?.scene(&scene_id).unwrap().has_image());
    assert!(matches!(
        second.unwrap_err().workflow_kind(),
        Some(WorkflowErrorKind::PreviewInProgress(id)) if *id == scene_id
    ));
    assert_eq!(mock.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_batch_skips_pending_scene() -> anyhow::Result<()> {
    let mock = slow_driver(100);
    let (studio, _) = studio(mock.clone()).await?;
    let project = studio.create_project(draft()).await?;
    let project = studio.generate_script(&project.id).await?;
    let ordered: Vec<String> = project.scenes_in_order().iter().map(|s| s.id.clone()).collect();

    let (single, batch) = tokio::join!(studio.generate_preview(&project.id, &ordered[0]), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        studio.generate_all_previews(&project.id).await
    });
    single?;
    let (_, outcomes) = batch?;

    let ids: Vec<&str> = outcomes.iter().map(|o| o.scene_id.as_str()).collect();
    assert_eq!(ids, vec![ordered[0].as_str(), ordered[1].as_str()]);
    assert!(matches!(
        outcomes[0].result.as_ref().unwrap_err().workflow_kind(),
        Some(WorkflowErrorKind::PreviewInProgress(_))
    ));
    assert!(outcomes[1].result.is_ok());
    assert_eq!(mock.call_count(), 3);

    let stored = studio.store().get(&project.id).await?;
    assert!(stored.scenes.iter().all(|s| s.has_image() && !s.is_generating_image));
    Ok(())
}

#[tokio::test]
async fn test_reset_pending_recovers_stale_flags() -> anyhow::Result<()> {
    let mock = Arc::new(MockDriver::new(vec![
        MockResponse::Text(scenes_body()),
        MockResponse::Image { mime: None, data: b"png".to_vec() },
    ]));
    let (studio, _) = studio(mock).await?;
    let project = studio.create_project(draft()).await?;
    let project = studio.generate_script(&project.id).await?;
    let scene_id = project.scenes[0].id.clone();
    studio
        .store()
        .modify(&project.id, |p| {
            p.scenes[0].is_generating_image = true;
            Ok(())
        })
        .await?;

    assert!(studio.generate_preview(&project.id, &scene_id).await.is_err());

    let cleared = studio.reset_pending(&project.id).await?;
    assert!(cleared.scenes.iter().all(|s| !s.is_generating_image));
    assert!(studio.generate_preview(&project.id, &scene_id).await.is_ok());
    Ok(())
}

#[tokio::test]
async fn test_character_files_through_commands() -> anyhow::Result<()> {
    use storyboard::cli::{CharacterCommands, Commands, run_command};

    let (studio, _) = studio(Arc::new(MockDriver::new(vec![MockResponse::Empty]))).await?;
    let project = studio.create_project(draft()).await?;
    let temp_dir = TempDir::new()?;
    let cast = temp_dir.path().join("cast.json");

    let missing = Commands::Characters(CharacterCommands::Import {
        project: project.id.clone(),
        file: cast.clone(),
    });
    let err = run_command(&studio, missing).await.unwrap_err();
    assert!(matches!(err.storage_kind(), Some(StorageErrorKind::FileRead(_))));

    let export = Commands::Characters(CharacterCommands::Export {
        project: project.id.clone(),
        out: Some(cast.clone()),
    });
    run_command(&studio, export).await?;
    let import = Commands::Characters(CharacterCommands::Import {
        project: project.id.clone(),
        file: cast,
    });
    run_command(&studio, import).await?;

    let stored = studio.store().get(&project.id).await?;
    assert_eq!(stored.characters.len(), 2 * project.characters.len());
    Ok(())
}
