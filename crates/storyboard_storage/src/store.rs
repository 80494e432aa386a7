//! The project store.

use std::sync::Arc;
use storyboard_core::{IdIssuer, Project, ProjectDraft};
use storyboard_error::{StorageError, StorageErrorKind, StoryboardResult};
use storyboard_interface::ProjectPersistence;
use tokio::sync::Mutex;

/// Owns the project list and persists it after every mutation.
///
/// Projects are kept newest-first. A mutation is applied to the in-memory
/// list, then the whole list is saved; if the save fails the list is restored
/// and the error is returned, so callers see either the full change or none.
pub struct ProjectStore {
    projects: Mutex<Vec<Project>>,
    persistence: Arc<dyn ProjectPersistence>,
    issuer: Arc<dyn IdIssuer>,
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("backend", &self.persistence.backend_name())
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl ProjectStore {
    /// Load the snapshot and open the store.
    ///
    /// A missing snapshot opens an empty store.
    ///
    /// # Errors
    ///
    /// Returns `Corrupt` if the stored data is not a valid project list, or
    /// `Read` if it cannot be read at all.
    #[tracing::instrument(skip_all, fields(backend = persistence.backend_name()))]
    pub async fn open(
        persistence: Arc<dyn ProjectPersistence>,
        issuer: Arc<dyn IdIssuer>,
    ) -> StoryboardResult<Self> {
        let projects = persistence.load().await?.unwrap_or_default();
        tracing::info!(count = projects.len(), "Opened project store");

        Ok(Self {
            projects: Mutex::new(projects),
            persistence,
            issuer,
        })
    }

    /// All projects, newest first.
    pub async fn list(&self) -> Vec<Project> {
        self.projects.lock().await.clone()
    }

    /// Look up a project by identifier.
    pub async fn get(&self, id: &str) -> StoryboardResult<Project> {
        let projects = self.projects.lock().await;
        projects
            .iter()
            .find(|project| project.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Create a project from a draft and insert it at the head of the list.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: ProjectDraft) -> StoryboardResult<Project> {
        let project = Project::from_draft(
            self.issuer.issue(),
            chrono::Utc::now().timestamp_millis(),
            draft,
        );

        let created = project.clone();
        self.commit(move |projects| {
            projects.insert(0, project);
            Ok(())
        })
        .await?;

        tracing::info!(id = %created.id, "Created project");
        Ok(created)
    }

    /// Replace the project with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no project has this identifier; nothing is
    /// written in that case.
    #[tracing::instrument(skip(self, project), fields(id = %project.id))]
    pub async fn update(&self, project: Project) -> StoryboardResult<Project> {
        let updated = project.clone();
        self.commit(move |projects| {
            let slot = find_mut(projects, &project.id)?;
            *slot = project;
            Ok(())
        })
        .await?;

        tracing::debug!("Updated project");
        Ok(updated)
    }

    /// Remove a project and return it.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> StoryboardResult<Project> {
        let mut removed = None;
        self.commit(|projects| {
            let index = projects
                .iter()
                .position(|project| project.id == id)
                .ok_or_else(|| not_found(id))?;
            removed = Some(projects.remove(index));
            Ok(())
        })
        .await?;

        tracing::info!("Deleted project");
        removed.ok_or_else(|| not_found(id))
    }

    /// Apply a change to one project and commit it.
    ///
    /// The lookup, the change and the save happen under one lock, so a
    /// closure that inspects the project sees the same state it changes. If
    /// the closure or the save fails nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no project has this identifier.
    pub async fn modify<F>(&self, id: &str, f: F) -> StoryboardResult<Project>
    where
        F: FnOnce(&mut Project) -> StoryboardResult<()>,
    {
        let mut updated = None;
        self.commit(|projects| {
            let project = find_mut(projects, id)?;
            f(project)?;
            updated = Some(project.clone());
            Ok(())
        })
        .await?;
        updated.ok_or_else(|| not_found(id))
    }

    /// Apply a change to transient state, such as in-flight flags.
    ///
    /// Unlike [`modify`](Self::modify) a failed save does not roll the change
    /// back: it stays in memory and is persisted by the next successful save.
    /// The save failure is still returned.
    #[tracing::instrument(skip(self, f))]
    pub async fn modify_transient<F>(&self, id: &str, f: F) -> StoryboardResult<Project>
    where
        F: FnOnce(&mut Project),
    {
        let mut projects = self.projects.lock().await;
        let project = find_mut(&mut projects, id)?;
        f(project);
        let updated = project.clone();

        if let Err(e) = self.persistence.save(&projects).await {
            tracing::warn!(error = %e, "Save failed, keeping transient change in memory");
            return Err(e);
        }
        Ok(updated)
    }

    async fn commit<F>(&self, mutate: F) -> StoryboardResult<()>
    where
        F: FnOnce(&mut Vec<Project>) -> StoryboardResult<()>,
    {
        let mut projects = self.projects.lock().await;
        let before = projects.clone();

        if let Err(e) = mutate(&mut projects) {
            *projects = before;
            return Err(e);
        }

        if let Err(e) = self.persistence.save(&projects).await {
            tracing::warn!(error = %e, "Save failed, rolling back");
            *projects = before;
            return Err(e);
        }
        Ok(())
    }
}

fn find_mut<'a>(projects: &'a mut [Project], id: &str) -> StoryboardResult<&'a mut Project> {
    projects
        .iter_mut()
        .find(|project| project.id == id)
        .ok_or_else(|| not_found(id))
}

fn not_found(id: &str) -> storyboard_error::StoryboardError {
    StorageError::new(StorageErrorKind::NotFound(id.to_string())).into()
}
