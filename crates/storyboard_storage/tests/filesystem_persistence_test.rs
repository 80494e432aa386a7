//! Tests for the filesystem backend.

use std::sync::Arc;
use storyboard_core::{ProjectDraft, SequentialIssuer};
use storyboard_error::StorageErrorKind;
use storyboard_interface::ProjectPersistence;
use storyboard_storage::{DEFAULT_SLOT, FileSystemPersistence, ProjectStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_file_loads_none() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let persistence = FileSystemPersistence::new(temp_dir.path(), DEFAULT_SLOT)?;

    assert!(persistence.load().await?.is_none());
    assert_eq!(persistence.backend_name(), "filesystem");
    Ok(())
}

#[tokio::test]
async fn test_store_survives_reopen() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("data");

    let persistence = Arc::new(FileSystemPersistence::new(&data_dir, DEFAULT_SLOT)?);
    let store =
        ProjectStore::open(persistence.clone(), Arc::new(SequentialIssuer::new("p"))).await?;
    let project = store
        .create(ProjectDraft::builder().name("On Disk").build()?)
        .await?;

    assert!(persistence.path().exists());
    assert!(!data_dir.join(format!("{}.tmp", DEFAULT_SLOT)).exists());

    let text = std::fs::read_to_string(persistence.path())?;
    assert!(text.contains("\"createdAt\""));
    assert!(text.contains("\"type\": \"SHORT\""));
    assert!(!text.contains("isGeneratingImage"));

    let reopened = ProjectStore::open(
        Arc::new(FileSystemPersistence::new(&data_dir, DEFAULT_SLOT)?),
        Arc::new(SequentialIssuer::new("p")),
    )
    .await?;
    assert_eq!(reopened.list().await, vec![project]);
    Ok(())
}

#[tokio::test]
async fn test_malformed_file_is_corrupt() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("projects.json"), "[{\"id\": 1}]")?;
    let persistence = FileSystemPersistence::new(temp_dir.path(), "projects.json")?;

    let err = persistence.load().await.unwrap_err();

    assert!(matches!(err.storage_kind(), Some(StorageErrorKind::Corrupt(_))));
    Ok(())
}
