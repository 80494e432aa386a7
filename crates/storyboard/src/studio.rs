//! Application service tying the store, orchestrator, editor and exporter together.
//!
//! Each operation reads the project from the store, does its work, and
//! commits through [`ProjectStore::modify`], so a failure leaves the stored
//! project unchanged. Generation results are applied to the project as it is
//! at completion time, looked up by identifier.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use storyboard_core::{CharacterDraft, IdIssuer, Project, ProjectDraft, ProjectIdea, UuidIssuer};
use storyboard_editor::{
    CharacterPatch, add_character, edit_character, edit_scene_prompt, export_characters,
    import_characters, remove_character, set_scene_image, set_scene_pending,
};
use storyboard_error::{StoryboardResult, WorkflowError, WorkflowErrorKind};
use storyboard_export::export_assets;
use storyboard_interface::GenerationDriver;
use storyboard_models::GeminiClient;
use storyboard_orchestrator::{Orchestrator, PreviewOutcome, PreviewRequest};
use storyboard_storage::{FileSystemPersistence, ProjectStore};
use tracing::{info, instrument, warn};

use crate::StoryboardConfig;

/// Storyboard application service.
#[derive(Debug)]
pub struct Studio {
    store: ProjectStore,
    orchestrator: Orchestrator,
    issuer: Arc<dyn IdIssuer>,
}

impl Studio {
    /// Open the file-backed store and the Gemini driver described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the snapshot cannot be read, or a
    /// configuration error if the HTTP client cannot be built.
    #[instrument(skip_all)]
    pub async fn open(config: &StoryboardConfig) -> StoryboardResult<Self> {
        let data_dir = config.storage.resolved_data_dir();
        let persistence = FileSystemPersistence::new(&data_dir, config.storage.slot.clone())?;
        let driver = GeminiClient::new(config.gemini.clone(), config.limits)?;
        info!(data_dir = %data_dir.display(), "Opening studio");

        Self::with_parts(
            Arc::new(persistence),
            Arc::new(driver),
            Arc::new(UuidIssuer),
            config,
        )
        .await
    }

    /// Open with explicit persistence, driver and identifier source.
    pub async fn with_parts(
        persistence: Arc<dyn storyboard_interface::ProjectPersistence>,
        driver: Arc<dyn GenerationDriver>,
        issuer: Arc<dyn IdIssuer>,
        config: &StoryboardConfig,
    ) -> StoryboardResult<Self> {
        let store = ProjectStore::open(persistence, issuer.clone()).await?;
        let orchestrator = Orchestrator::new(driver, issuer.clone())
            .with_policy(config.orchestrator.prompt_policy)
            .with_preview_concurrency(config.preview_concurrency());

        Ok(Self {
            store,
            orchestrator,
            issuer,
        })
    }

    /// The underlying project store.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// The underlying orchestrator.
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Create a project.
    pub async fn create_project(&self, draft: ProjectDraft) -> StoryboardResult<Project> {
        self.store.create(draft).await
    }

    /// Ask for a project suggestion without creating anything.
    pub async fn suggest_idea(&self, topic: Option<&str>) -> StoryboardResult<ProjectIdea> {
        self.orchestrator.generate_project_idea(topic).await
    }

    /// Create a project seeded from a suggestion.
    pub async fn apply_idea(&self, idea: ProjectIdea) -> StoryboardResult<Project> {
        self.store.create(idea.into_draft()).await
    }

    /// Generate the scene script from the project's story idea.
    ///
    /// Replaces any existing scenes.
    ///
    /// # Errors
    ///
    /// Returns `MissingStoryIdea` without sending a request if the project's
    /// story idea is blank.
    #[instrument(skip(self))]
    pub async fn generate_script(&self, project_id: &str) -> StoryboardResult<Project> {
        let project = self.store.get(project_id).await?;
        if project.story_idea.trim().is_empty() {
            let kind = WorkflowErrorKind::MissingStoryIdea(project.name);
            return Err(WorkflowError::new(kind).into());
        }

        let scenes = self
            .orchestrator
            .generate_story_scenes(
                &project.story_idea,
                &project.characters,
                project.style,
                project.video_type,
            )
            .await?;

        self.store
            .modify(project_id, move |project| {
                project.scenes = scenes;
                Ok(())
            })
            .await
    }

    /// Generate the preview image of one scene.
    ///
    /// The scene is marked pending and persisted before the request; the flag
    /// is cleared whether the request succeeds or fails.
    ///
    /// # Errors
    ///
    /// Returns `PreviewInProgress` if the scene is already pending, and
    /// `SceneNotFound` if the project has no such scene.
    #[instrument(skip(self))]
    pub async fn generate_preview(
        &self,
        project_id: &str,
        scene_id: &str,
    ) -> StoryboardResult<Project> {
        let mut prompt = String::new();
        self.store
            .modify(project_id, |project| {
                let scene = project.scene(scene_id).ok_or_else(|| {
                    WorkflowError::new(WorkflowErrorKind::SceneNotFound(scene_id.to_string()))
                })?;
                if scene.is_generating_image {
                    return Err(WorkflowError::new(WorkflowErrorKind::PreviewInProgress(
                        scene_id.to_string(),
                    ))
                    .into());
                }
                prompt = scene.visual_prompt.clone();
                project.scenes = set_scene_pending(&project.scenes, scene_id, true);
                Ok(())
            })
            .await?;

        let pending = [scene_id.to_string()];
        let uri = match self.orchestrator.generate_scene_preview(&prompt).await {
            Ok(uri) => uri,
            Err(e) => {
                self.clear_pending(project_id, &pending).await;
                return Err(e);
            }
        };

        let applied = self
            .store
            .modify(project_id, |project| {
                project.scenes = set_scene_image(&project.scenes, scene_id, &uri);
                Ok(())
            })
            .await;
        if applied.is_err() {
            self.clear_pending(project_id, &pending).await;
        }
        applied
    }

    /// Generate previews for every scene of a project.
    ///
    /// Successful images are stored in one commit; failures are reported per
    /// scene and leave those scenes without an image. Scenes whose preview is
    /// already in flight are skipped and reported as `PreviewInProgress`.
    /// Outcomes are ordered by scene number.
    #[instrument(skip(self))]
    pub async fn generate_all_previews(
        &self,
        project_id: &str,
    ) -> StoryboardResult<(Project, Vec<PreviewOutcome>)> {
        let mut requests = Vec::new();
        let mut skipped = Vec::new();
        self.store
            .modify(project_id, |project| {
                for scene in project.scenes_in_order() {
                    if scene.is_generating_image {
                        skipped.push(scene.id.clone());
                    } else {
                        requests.push(PreviewRequest::from(scene));
                    }
                }
                for request in &requests {
                    project.scenes = set_scene_pending(&project.scenes, &request.scene_id, true);
                }
                Ok(())
            })
            .await?;

        let pending: Vec<String> = requests.iter().map(|r| r.scene_id.clone()).collect();
        let mut outcomes = self.orchestrator.generate_scene_previews(requests).await;

        let applied = self
            .store
            .modify(project_id, |project| {
                for outcome in &outcomes {
                    project.scenes = match &outcome.result {
                        Ok(uri) => set_scene_image(&project.scenes, &outcome.scene_id, uri),
                        Err(_) => set_scene_pending(&project.scenes, &outcome.scene_id, false),
                    };
                }
                Ok(())
            })
            .await;
        let updated = match applied {
            Ok(project) => project,
            Err(e) => {
                self.clear_pending(project_id, &pending).await;
                return Err(e);
            }
        };

        if !skipped.is_empty() {
            warn!(skipped = skipped.len(), "Skipped scenes with a preview in flight");
        }
        outcomes.extend(skipped.into_iter().map(|scene_id| {
            let kind = WorkflowErrorKind::PreviewInProgress(scene_id.clone());
            PreviewOutcome {
                scene_id,
                result: Err(WorkflowError::new(kind).into()),
            }
        }));
        outcomes.sort_by_key(|o| updated.scene(&o.scene_id).map(|s| s.scene_number));

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!(total = outcomes.len(), failed, "Generated previews");
        Ok((updated, outcomes))
    }

    /// Clear every pending flag of a project.
    ///
    /// Recovers scenes left pending by an interrupted run.
    #[instrument(skip(self))]
    pub async fn reset_pending(&self, project_id: &str) -> StoryboardResult<Project> {
        self.store
            .modify(project_id, |project| {
                for scene in &mut project.scenes {
                    scene.is_generating_image = false;
                }
                Ok(())
            })
            .await
    }

    async fn clear_pending(&self, project_id: &str, scene_ids: &[String]) {
        let result = self
            .store
            .modify_transient(project_id, |project| {
                for id in scene_ids {
                    project.scenes = set_scene_pending(&project.scenes, id, false);
                }
            })
            .await;
        if let Err(e) = result {
            warn!(error = %e, "Could not persist cleared pending flags");
        }
    }

    /// Append characters from interchange JSON.
    pub async fn import_characters(
        &self,
        project_id: &str,
        json_text: &str,
    ) -> StoryboardResult<Project> {
        let issuer = self.issuer.clone();
        self.store
            .modify(project_id, |project| {
                project.characters =
                    import_characters(&project.characters, json_text, issuer.as_ref())?;
                Ok(())
            })
            .await
    }

    /// Characters of a project as interchange JSON.
    pub async fn export_characters(&self, project_id: &str) -> StoryboardResult<String> {
        let project = self.store.get(project_id).await?;
        export_characters(&project.characters)
    }

    /// Append a new character.
    pub async fn add_character(
        &self,
        project_id: &str,
        draft: CharacterDraft,
    ) -> StoryboardResult<Project> {
        let issuer = self.issuer.clone();
        self.store
            .modify(project_id, move |project| {
                project.characters = add_character(&project.characters, draft, issuer.as_ref());
                Ok(())
            })
            .await
    }

    /// Change fields of a character.
    pub async fn edit_character(
        &self,
        project_id: &str,
        character_id: &str,
        patch: &CharacterPatch,
    ) -> StoryboardResult<Project> {
        self.store
            .modify(project_id, |project| {
                project.characters = edit_character(&project.characters, character_id, patch);
                Ok(())
            })
            .await
    }

    /// Remove a character.
    pub async fn remove_character(
        &self,
        project_id: &str,
        character_id: &str,
    ) -> StoryboardResult<Project> {
        self.store
            .modify(project_id, |project| {
                project.characters = remove_character(&project.characters, character_id);
                Ok(())
            })
            .await
    }

    /// Replace a scene's visual prompt.
    pub async fn edit_scene_prompt(
        &self,
        project_id: &str,
        scene_id: &str,
        text: &str,
    ) -> StoryboardResult<Project> {
        self.store
            .modify(project_id, |project| {
                project.scenes = edit_scene_prompt(&project.scenes, scene_id, text);
                Ok(())
            })
            .await
    }

    /// Export a project's assets into `out_dir`.
    #[instrument(skip(self, out_dir), fields(out_dir = %out_dir.display()))]
    pub async fn export(&self, project_id: &str, out_dir: &Path) -> StoryboardResult<PathBuf> {
        let project = self.store.get(project_id).await?;
        let archive = export_assets(&project)?;
        archive.write_to(out_dir).await
    }
}
