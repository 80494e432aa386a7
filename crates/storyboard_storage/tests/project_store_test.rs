//! Tests for the project store over the in-memory backend.

use std::sync::Arc;
use storyboard_core::{
    AnimationStyle, ProjectDraft, SequentialIssuer, VideoType, default_characters,
};
use storyboard_error::StorageErrorKind;
use storyboard_storage::{InMemoryPersistence, ProjectStore};

async fn open_store() -> anyhow::Result<(ProjectStore, Arc<InMemoryPersistence>)> {
    let persistence = Arc::new(InMemoryPersistence::new());
    let store =
        ProjectStore::open(persistence.clone(), Arc::new(SequentialIssuer::new("p"))).await?;
    Ok((store, persistence))
}

fn draft(name: &str) -> ProjectDraft {
    ProjectDraft::builder().name(name).build().unwrap()
}

#[tokio::test]
async fn test_create_default_project() -> anyhow::Result<()> {
    let (store, persistence) = open_store().await?;

    let project = store.create(draft("Test")).await?;
    let projects = store.list().await;

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0], project);
    assert_eq!(project.name, "Test");
    assert_eq!(project.video_type, VideoType::Short);
    assert_eq!(project.style, AnimationStyle::DisneyPixar);
    assert_eq!(project.characters, default_characters());
    assert!(project.scenes.is_empty());
    assert!(project.story_idea.is_empty());
    assert!(project.created_at > 0);
    assert_eq!(persistence.save_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_new_projects_are_listed_first() -> anyhow::Result<()> {
    let (store, _) = open_store().await?;

    store.create(draft("First")).await?;
    store.create(draft("Second")).await?;

    let names: Vec<String> = store.list().await.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Second", "First"]);
    Ok(())
}

#[tokio::test]
async fn test_update_after_delete_is_not_found() -> anyhow::Result<()> {
    let (store, persistence) = open_store().await?;
    store.create(draft("Keep")).await?;
    let project = store.create(draft("Gone")).await?;

    let removed = store.delete(&project.id).await?;
    assert_eq!(removed.id, project.id);
    let before = store.list().await;
    let saves = persistence.save_count();

    let err = store.update(project.clone()).await.unwrap_err();

    assert_eq!(
        err.storage_kind(),
        Some(&StorageErrorKind::NotFound(project.id.clone()))
    );
    assert_eq!(store.list().await, before);
    assert_eq!(persistence.save_count(), saves);
    Ok(())
}

#[tokio::test]
async fn test_get_and_delete_missing() -> anyhow::Result<()> {
    let (store, _) = open_store().await?;

    assert!(matches!(
        store.get("nope").await.unwrap_err().storage_kind(),
        Some(StorageErrorKind::NotFound(_))
    ));
    assert!(matches!(
        store.delete("nope").await.unwrap_err().storage_kind(),
        Some(StorageErrorKind::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_failed_save_rolls_back() -> anyhow::Result<()> {
    let (store, persistence) = open_store().await?;
    let project = store.create(draft("Stable")).await?;

    persistence.set_fail_writes(true);

    assert!(store.create(draft("Lost")).await.is_err());
    let mut renamed = project.clone();
    renamed.name = "Renamed".to_string();
    assert!(store.update(renamed).await.is_err());
    assert!(store.delete(&project.id).await.is_err());

    assert_eq!(store.list().await, vec![project]);
    Ok(())
}

#[tokio::test]
async fn test_modify_commits_or_leaves_untouched() -> anyhow::Result<()> {
    let (store, _) = open_store().await?;
    let project = store.create(draft("Story")).await?;

    let updated = store
        .modify(&project.id, |p| {
            p.story_idea = "A fox learns to fly.".to_string();
            Ok(())
        })
        .await?;
    assert_eq!(updated.story_idea, "A fox learns to fly.");

    let result = store
        .modify(&project.id, |p| {
            p.story_idea.clear();
            Err(storyboard_error::WorkflowError::new(
                storyboard_error::WorkflowErrorKind::MissingStoryIdea(p.name.clone()),
            )
            .into())
        })
        .await;
    assert!(result.is_err());
    assert_eq!(store.get(&project.id).await?.story_idea, "A fox learns to fly.");
    Ok(())
}

#[tokio::test]
async fn test_transient_change_survives_failed_save() -> anyhow::Result<()> {
    let (store, persistence) = open_store().await?;
    let project = store.create(draft("Flags")).await?;
    let saved = persistence.raw();
    persistence.set_fail_writes(true);

    let result = store
        .modify_transient(&project.id, |p| p.story_idea = "kept".to_string())
        .await;

    assert!(matches!(
        result.unwrap_err().storage_kind(),
        Some(StorageErrorKind::Write(_))
    ));
    assert_eq!(store.get(&project.id).await?.story_idea, "kept");
    assert_eq!(persistence.raw(), saved);

    persistence.set_fail_writes(false);
    store.modify(&project.id, |_| Ok(())).await?;
    assert!(persistence.raw().unwrap_or_default().contains("kept"));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_modifies_both_apply() -> anyhow::Result<()> {
    let (store, _) = open_store().await?;
    let project = store.create(draft("Shared")).await?;

    let (first, second) = tokio::join!(
        store.modify(&project.id, |p| {
            p.story_idea.push('a');
            Ok(())
        }),
        store.modify(&project.id, |p| {
            p.story_idea.push('b');
            Ok(())
        })
    );
    first?;
    second?;

    assert_eq!(store.get(&project.id).await?.story_idea.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_reopen_reads_snapshot() -> anyhow::Result<()> {
    let (store, persistence) = open_store().await?;
    let project = store.create(draft("Persisted")).await?;

    let raw = persistence.raw().unwrap_or_default();
    let reopened = ProjectStore::open(
        Arc::new(InMemoryPersistence::with_raw(raw)),
        Arc::new(SequentialIssuer::new("q")),
    )
    .await?;

    assert_eq!(reopened.list().await, vec![project]);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_snapshot_fails_fast() {
    let persistence = Arc::new(InMemoryPersistence::with_raw("{not json"));

    let err = ProjectStore::open(persistence, Arc::new(SequentialIssuer::new("p")))
        .await
        .unwrap_err();

    assert!(matches!(err.storage_kind(), Some(StorageErrorKind::Corrupt(_))));
}
