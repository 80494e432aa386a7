//! Layered application configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`storyboard.toml` shipped with the crate)
//! 2. User config in home directory (`~/.config/storyboard/storyboard.toml`)
//! 3. User config in current directory (`./storyboard.toml`)
//! 4. `STORYBOARD_<SECTION>__<KEY>` environment variables

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storyboard_error::{ConfigError, ConfigErrorKind, StoryboardError, StoryboardResult};
use storyboard_models::GeminiConfig;
use storyboard_orchestrator::PromptPolicy;
use storyboard_rate_limit::LimitConfig;
use storyboard_storage::DEFAULT_SLOT;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../storyboard.toml");

/// Where projects are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Data directory; the platform data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Snapshot file name inside the data directory
    #[serde(default = "default_slot")]
    pub slot: String,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            slot: default_slot(),
        }
    }
}

impl StorageConfig {
    /// Resolved data directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join("storyboard"))
                .unwrap_or_else(|| PathBuf::from(".storyboard")),
        }
    }
}

/// Generation flow settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OrchestratorConfig {
    /// Handling of scene prompts that omit the style label
    #[serde(default)]
    pub prompt_policy: PromptPolicy,
}

/// Top-level Storyboard configuration.
///
/// # Example
///
/// ```no_run
/// use storyboard::StoryboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// println!("Image model: {}", config.gemini.image_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct StoryboardConfig {
    /// Gemini driver settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Request limits for preview generation
    #[serde(default)]
    pub limits: LimitConfig,
    /// Project persistence
    #[serde(default)]
    pub storage: StorageConfig,
    /// Generation flow settings
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,
}

impl StoryboardConfig {
    /// Load configuration with the full precedence chain.
    ///
    /// User config files are optional and skipped if not found.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("storyboard").required(false))
            .add_source(
                Environment::with_prefix("STORYBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder.build())
    }

    /// Bundled defaults overlaid with one TOML document.
    pub fn from_toml_str(overrides: &str) -> StoryboardResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml))
            .build();
        Self::finish(config)
    }

    /// Bundled defaults overlaid with one TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build();
        Self::finish(config)
    }

    fn finish(built: Result<Config, config::ConfigError>) -> StoryboardResult<Self> {
        built
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(ConfigErrorKind::Sources(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))
            })
    }

    /// Number of previews a batch keeps in flight.
    pub fn preview_concurrency(&self) -> usize {
        self.limits
            .max_concurrent
            .map(|n| n.max(1) as usize)
            .unwrap_or(usize::MAX)
    }
}
