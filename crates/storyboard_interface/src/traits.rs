//! Ports to the outside world.

use async_trait::async_trait;
use storyboard_core::{GenerateRequest, GenerateResponse, Project};
use storyboard_error::StoryboardResult;

/// The external generation capability.
///
/// A single request/response exchange per call: no retries, no streaming.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Send one request and return the raw outputs.
    async fn generate(&self, req: &GenerateRequest) -> StoryboardResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Whether an access credential is configured.
    ///
    /// Callers check this before building a request so a missing credential
    /// never reaches the network.
    fn has_credential(&self) -> bool;

    /// Name of the setting the credential is read from, for error messages.
    fn credential_hint(&self) -> &str;
}

/// Single named slot holding the full serialized project list.
#[async_trait]
pub trait ProjectPersistence: Send + Sync {
    /// Read the full snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet and a `Corrupt`
    /// storage error when the stored data is not a valid project list.
    async fn load(&self) -> StoryboardResult<Option<Vec<Project>>>;

    /// Overwrite the slot with the given snapshot.
    async fn save(&self, projects: &[Project]) -> StoryboardResult<()>;

    /// Backend name (e.g., "filesystem", "memory").
    fn backend_name(&self) -> &'static str;
}
