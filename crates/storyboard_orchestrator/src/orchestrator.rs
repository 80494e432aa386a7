//! The generation orchestrator.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use storyboard_core::{
    AnimationStyle, AspectRatio, Character, GenerateRequest, GeneratedImage, IdIssuer,
    ProjectIdea, Scene, VideoType,
};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};
use storyboard_interface::GenerationDriver;
use tracing::{debug, info, instrument, warn};

use crate::directive::{idea_directive, story_directive};
use crate::extraction::parse_json;
use crate::policy::PromptPolicy;
use crate::response::{IdeaRecord, SceneRecord, malformed};
use crate::schema::{project_idea_schema, scene_list_schema};

/// MIME type assumed when the service omits one.
const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Aspect ratio of every scene preview.
///
/// Previews are always landscape, whatever the project's video format.
const PREVIEW_ASPECT_RATIO: AspectRatio = AspectRatio::Landscape;

/// One preview to generate as part of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    /// Scene the preview belongs to
    pub scene_id: String,
    /// Prompt sent as-is
    pub visual_prompt: String,
}

impl From<&Scene> for PreviewRequest {
    fn from(scene: &Scene) -> Self {
        Self {
            scene_id: scene.id.clone(),
            visual_prompt: scene.visual_prompt.clone(),
        }
    }
}

/// Result of one preview in a batch.
#[derive(Debug)]
pub struct PreviewOutcome {
    /// Scene the preview belongs to
    pub scene_id: String,
    /// Data URI on success
    pub result: StoryboardResult<String>,
}

/// Drives the generation capability for scenes, previews and ideas.
///
/// Every operation is a single request/response exchange. The credential is
/// checked before any request is built.
#[derive(Clone)]
pub struct Orchestrator {
    driver: Arc<dyn GenerationDriver>,
    issuer: Arc<dyn IdIssuer>,
    policy: PromptPolicy,
    preview_concurrency: usize,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("provider", &self.driver.provider_name())
            .field("policy", &self.policy)
            .field("preview_concurrency", &self.preview_concurrency)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// Create an orchestrator with the default policy and two concurrent previews.
    pub fn new(driver: Arc<dyn GenerationDriver>, issuer: Arc<dyn IdIssuer>) -> Self {
        Self {
            driver,
            issuer,
            policy: PromptPolicy::default(),
            preview_concurrency: 2,
        }
    }

    /// Set the prompt-contract policy.
    pub fn with_policy(mut self, policy: PromptPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set how many previews a batch keeps in flight (at least one).
    pub fn with_preview_concurrency(mut self, concurrency: usize) -> Self {
        self.preview_concurrency = concurrency.max(1);
        self
    }

    /// Current prompt-contract policy.
    pub fn policy(&self) -> PromptPolicy {
        self.policy
    }

    fn ensure_credential(&self) -> StoryboardResult<()> {
        if self.driver.has_credential() {
            Ok(())
        } else {
            warn!(provider = self.driver.provider_name(), "No credential configured");
            Err(GenerationError::new(GenerationErrorKind::MissingCredential(
                self.driver.credential_hint().to_string(),
            ))
            .into())
        }
    }

    /// Turn a story idea into ordered scenes.
    ///
    /// Scenes come back sorted by scene number, each with a fresh identifier
    /// and a visual prompt that names the style.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` before any request when no key is configured
    /// - `MalformedResponse` if the response is not a valid scene list, or a
    ///   prompt omits the style under [`PromptPolicy::Strict`]
    /// - `NoContent` if the model returns no scenes
    /// - `Upstream` if the remote call fails
    #[instrument(skip(self, idea, characters), fields(character_count = characters.len()))]
    pub async fn generate_story_scenes(
        &self,
        idea: &str,
        characters: &[Character],
        style: AnimationStyle,
        video_type: VideoType,
    ) -> StoryboardResult<Vec<Scene>> {
        self.ensure_credential()?;

        let request = GenerateRequest::json(
            story_directive(idea, characters, style, video_type),
            scene_list_schema(),
        );
        let response = self.driver.generate(&request).await?;
        let text = response
            .text()
            .ok_or_else(|| no_content("response has no text part"))?;

        let records: Vec<SceneRecord> = parse_json(&text)?;
        if records.is_empty() {
            return Err(no_content("model returned an empty scene list"));
        }

        let mut scenes = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_scene(index, self.issuer.as_ref()))
            .collect::<StoryboardResult<Vec<_>>>()?;
        scenes.sort_by_key(|scene| scene.scene_number);

        for scene in &mut scenes {
            self.check_prompt(scene, characters, style)?;
        }

        info!(count = scenes.len(), "Generated scenes");
        Ok(scenes)
    }

    fn check_prompt(
        &self,
        scene: &mut Scene,
        characters: &[Character],
        style: AnimationStyle,
    ) -> StoryboardResult<()> {
        let label = style.label();
        if !contains_ignore_case(&scene.visual_prompt, label) {
            match self.policy {
                PromptPolicy::Strict => {
                    return Err(malformed(format!(
                        "scene {} prompt does not mention the {} style",
                        scene.scene_number, label
                    )));
                }
                PromptPolicy::Repair => {
                    warn!(
                        scene = scene.scene_number,
                        style = label,
                        "Prompt omits style, appending it"
                    );
                    let prompt = scene.visual_prompt.trim_end().trim_end_matches('.');
                    scene.visual_prompt = format!("{}. {} style.", prompt, label);
                }
            }
        }

        if !characters.is_empty() && !mentions_any_feature(&scene.visual_prompt, characters) {
            warn!(scene = scene.scene_number, "Prompt mentions no character features");
        }
        Ok(())
    }

    /// Generate a preview image for one visual prompt.
    ///
    /// The prompt is sent unchanged. The result is a `data:` URI.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` before any request when no key is configured
    /// - `NoContent` if the response carries no image
    /// - `Upstream` if the remote call fails
    #[instrument(skip(self, visual_prompt), fields(prompt_len = visual_prompt.len()))]
    pub async fn generate_scene_preview(&self, visual_prompt: &str) -> StoryboardResult<String> {
        self.ensure_credential()?;

        let request = GenerateRequest::image(visual_prompt, PREVIEW_ASPECT_RATIO);
        let response = self.driver.generate(&request).await?;
        let (mime, data) = response
            .first_image()
            .ok_or_else(|| no_content("response has no image part"))?;
        if data.is_empty() {
            return Err(no_content("image part is empty"));
        }

        let image = GeneratedImage {
            mime: mime
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(DEFAULT_IMAGE_MIME)
                .to_string(),
            data: data.to_vec(),
        };
        debug!(mime = %image.mime, size = image.data.len(), "Generated preview");
        Ok(image.to_data_uri())
    }

    /// Generate several previews concurrently.
    ///
    /// Outcomes are returned in input order and succeed or fail independently.
    /// A missing credential fails every outcome without any request.
    #[instrument(
        skip(self, requests),
        fields(count = requests.len(), concurrency = self.preview_concurrency)
    )]
    pub async fn generate_scene_previews(
        &self,
        requests: Vec<PreviewRequest>,
    ) -> Vec<PreviewOutcome> {
        stream::iter(requests)
            .map(|request| async move {
                let result = self.generate_scene_preview(&request.visual_prompt).await;
                if let Err(e) = &result {
                    warn!(scene_id = %request.scene_id, error = %e, "Preview failed");
                }
                PreviewOutcome {
                    scene_id: request.scene_id,
                    result,
                }
            })
            .buffered(self.preview_concurrency)
            .collect()
            .await
    }

    /// Suggest a new project, optionally about a topic.
    ///
    /// Character identifiers are always freshly issued.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` before any request when no key is configured
    /// - `MalformedResponse` for invalid JSON, unknown enum values or no characters
    /// - `Upstream` if the remote call fails
    #[instrument(skip(self))]
    pub async fn generate_project_idea(
        &self,
        topic: Option<&str>,
    ) -> StoryboardResult<ProjectIdea> {
        self.ensure_credential()?;

        let request = GenerateRequest::json(idea_directive(topic), project_idea_schema());
        let response = self.driver.generate(&request).await?;
        let text = response
            .text()
            .ok_or_else(|| no_content("response has no text part"))?;

        let record: IdeaRecord = parse_json(&text)?;
        let idea = record.into_idea(self.issuer.as_ref())?;

        info!(name = %idea.name, characters = idea.characters.len(), "Generated project idea");
        Ok(idea)
    }
}

#[track_caller]
fn no_content(message: &str) -> storyboard_error::StoryboardError {
    GenerationError::new(GenerationErrorKind::NoContent(message.to_string())).into()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether the prompt contains any comma-separated feature fragment of any character.
fn mentions_any_feature(prompt: &str, characters: &[Character]) -> bool {
    let prompt = prompt.to_lowercase();
    characters.iter().any(|character| {
        character
            .features
            .split(',')
            .map(|fragment| fragment.trim().to_lowercase())
            .any(|fragment| !fragment.is_empty() && prompt.contains(&fragment))
    })
}
