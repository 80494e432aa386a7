//! Generation capability drivers for Storyboard.
//!
//! # Available Drivers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature (default)
//! - **Mock** (scripted, no network) - Enable with `mock` feature
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use storyboard_models::{GeminiClient, GeminiConfig};
//! use storyboard_interface::GenerationDriver;
//! use storyboard_core::{AspectRatio, GenerateRequest};
//! use storyboard_rate_limit::LimitConfig;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiConfig::default(), LimitConfig::default())?;
//! let request = GenerateRequest::image("A fox in a blue scarf, Disney Pixar style", AspectRatio::Landscape);
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, Content, GeminiClient, GeminiConfig, GeminiRequest, GeminiResponse,
    GenerationConfig, ImageConfig, InlineData, Part, PromptFeedback,
};

#[cfg(feature = "mock")]
pub use mock::{MockDriver, MockResponse};
