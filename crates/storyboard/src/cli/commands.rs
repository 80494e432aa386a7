//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storyboard_core::{AnimationStyle, VideoType};

/// Storyboard - plan animated videos: story ideas, scene scripts and preview images
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Plan animated videos: story ideas, scene scripts and preview images", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project management commands
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Ask the model for a project suggestion
    Idea {
        /// Topic to base the suggestion on
        #[arg(long)]
        topic: Option<String>,

        /// Create a project from the suggestion
        #[arg(long)]
        apply: bool,
    },

    /// Generate the scene script from the project's story idea
    Script {
        /// Project identifier
        project: String,
    },

    /// Generate preview images
    Preview(PreviewArgs),

    /// Character commands
    #[command(subcommand)]
    Characters(CharacterCommands),

    /// Scene commands
    #[command(subcommand)]
    Scene(SceneCommands),

    /// Export a project's script and images as a zip archive
    Export {
        /// Project identifier
        project: String,

        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

/// Arguments of the `preview` command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Project identifier
    pub project: String,

    /// Scene identifier
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub scene: Option<String>,

    /// Generate previews for every scene
    #[arg(long)]
    pub all: bool,
}

/// Project management subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects, newest first
    List,

    /// Show a project with its characters and scenes
    Show {
        /// Project identifier
        project: String,

        /// Print the raw JSON record
        #[arg(long)]
        json: bool,
    },

    /// Create a project
    Create {
        /// Project name
        name: String,

        /// Video format
        #[arg(long = "type", default_value_t = VideoType::Short)]
        video_type: VideoType,

        /// Animation style
        #[arg(long, default_value_t = AnimationStyle::DisneyPixar)]
        style: AnimationStyle,

        /// Story idea
        #[arg(long, default_value = "")]
        idea: String,
    },

    /// Delete a project
    Delete {
        /// Project identifier
        project: String,
    },
}

/// Character subcommands
#[derive(Subcommand, Debug)]
pub enum CharacterCommands {
    /// Append characters from a JSON file
    Import {
        /// Project identifier
        project: String,

        /// File holding `{"characters": [...]}`
        file: PathBuf,
    },

    /// Print characters as importable JSON
    Export {
        /// Project identifier
        project: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Add a character
    Add {
        /// Project identifier
        project: String,

        /// Character name
        #[arg(long)]
        name: String,

        /// Who the character is
        #[arg(long)]
        description: String,

        /// Concrete visual features
        #[arg(long)]
        features: String,

        /// Personality notes
        #[arg(long)]
        personality: Option<String>,
    },

    /// Remove a character
    Remove {
        /// Project identifier
        project: String,

        /// Character identifier
        character: String,
    },
}

/// Scene subcommands
#[derive(Subcommand, Debug)]
pub enum SceneCommands {
    /// Replace a scene's visual prompt
    EditPrompt {
        /// Project identifier
        project: String,

        /// Scene identifier
        scene: String,

        /// New visual prompt
        prompt: String,
    },

    /// Clear preview flags left behind by an interrupted run
    ClearPending {
        /// Project identifier
        project: String,
    },
}
