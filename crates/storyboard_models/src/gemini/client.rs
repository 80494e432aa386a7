//! Gemini REST client.
//!
//! One `generateContent` call per request. Outgoing calls pass through a
//! [`RequestLimiter`] so concurrent preview requests stay within the
//! configured rate and concurrency limits.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use storyboard_core::{GenerateRequest, GenerateResponse};
use storyboard_error::{
    ConfigError, ConfigErrorKind, GenerationError, GenerationErrorKind, StoryboardResult,
};
use storyboard_interface::GenerationDriver;
use storyboard_rate_limit::{LimitConfig, RequestLimiter};
use tracing::{debug, instrument, warn};

use super::{GeminiConfig, GeminiRequest, GeminiResponse};

/// Client for the Google Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    config: GeminiConfig,
    limiter: RequestLimiter,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.config.base_url)
            .field("text_model", &self.config.text_model)
            .field("image_model", &self.config.image_model)
            .field("has_credential", &self.api_key.is_some())
            .field("limiter", &self.limiter)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client, reading the API key from `config.api_key_env`.
    ///
    /// A missing key is not an error here; every request fails with
    /// `MissingCredential` instead, before touching the network.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    #[instrument(name = "gemini_client_new", skip_all, fields(api_key_env = %config.api_key_env))]
    pub fn new(config: GeminiConfig, limits: LimitConfig) -> StoryboardResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!(var = %config.api_key_env, "No Gemini API key found in environment");
        }
        Self::with_api_key(api_key, config, limits)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn with_api_key(
        api_key: Option<String>,
        config: GeminiConfig,
        limits: LimitConfig,
    ) -> StoryboardResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::HttpClient(e.to_string())))?;

        Ok(Self {
            client,
            api_key,
            config,
            limiter: RequestLimiter::new(limits),
        })
    }

    /// Driver settings.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Model a request will be sent to.
    pub fn model_for(&self, req: &GenerateRequest) -> String {
        match &req.model {
            Some(model) => model.clone(),
            None if req.is_image() => self.config.image_model.clone(),
            None => self.config.text_model.clone(),
        }
    }

    /// `generateContent` endpoint for a model.
    ///
    /// Accepts both "gemini-2.5-flash" and "models/gemini-2.5-flash".
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate_internal(&self, req: &GenerateRequest) -> StoryboardResult<GenerateResponse> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MissingCredential(
                self.config.api_key_env.clone(),
            ))
        })?;

        let model = self.model_for(req);
        let url = self.endpoint(&model);
        let body = GeminiRequest::from_request(req);

        let _guard = self.limiter.acquire().await?;
        debug!(url = %url, model = %model, "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::upstream(
                    e.status().map(|s| s.as_u16()),
                    format!("Request failed: {}", e),
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(GenerationError::new(GenerationErrorKind::upstream(
                Some(status.as_u16()),
                error_text,
            ))
            .into());
        }

        let text = response.text().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::upstream(
                Some(status.as_u16()),
                format!("Failed to read response body: {}", e),
            ))
        })?;
        let wire: GeminiResponse = serde_json::from_str(&text).map_err(|e| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Unexpected Gemini response body: {}",
                e
            )))
        })?;

        if let Some(reason) = wire.block_reason() {
            warn!(reason = %reason, "Gemini blocked the prompt");
        }

        wire.into_generate_response()
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(skip(self, req), fields(image = req.is_image()))]
    async fn generate(&self, req: &GenerateRequest) -> StoryboardResult<GenerateResponse> {
        self.generate_internal(req).await
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn credential_hint(&self) -> &str {
        &self.config.api_key_env
    }
}
