//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyboard binary.

mod commands;
mod handlers;

pub use commands::{CharacterCommands, Cli, Commands, PreviewArgs, ProjectCommands, SceneCommands};
pub use handlers::run_command;
