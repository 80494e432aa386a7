//! Google Gemini REST API driver.
//!
//! Structured scene and idea generation use `responseMimeType` plus a
//! `responseSchema`; previews use an image-capable model with
//! `responseModalities: ["IMAGE"]` and an `imageConfig.aspectRatio`.

mod client;
mod config;
mod dto;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use dto::{
    Candidate, Content, GeminiRequest, GeminiResponse, GenerationConfig, ImageConfig, InlineData,
    Part, PromptFeedback,
};
