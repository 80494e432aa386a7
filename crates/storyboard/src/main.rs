//! Storyboard CLI binary.
//!
//! This binary provides command-line access to Storyboard's functionality:
//! - Create and manage video projects
//! - Generate scene scripts, preview images and project ideas
//! - Import, export and edit characters
//! - Export a project's script and images as a zip archive

use clap::Parser;
use storyboard::cli::{Cli, run_command};
use storyboard::{Studio, StoryboardConfig, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Pick up GEMINI_API_KEY from .env
    let _ = dotenvy::dotenv();

    telemetry::init_logging(cli.verbose)?;

    let config = StoryboardConfig::load()?;
    let studio = Studio::open(&config).await?;

    if let Err(e) = run_command(&studio, cli.command).await {
        tracing::error!(error = %e, "Command failed");
        return Err(e.into());
    }

    Ok(())
}
