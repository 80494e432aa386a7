//! Command handlers.

use super::{CharacterCommands, Commands, PreviewArgs, ProjectCommands, SceneCommands};
use crate::Studio;
use storyboard_core::{CharacterDraft, Project, ProjectDraft};
use storyboard_error::{
    StorageError, StorageErrorKind, StoryboardResult, WorkflowError, WorkflowErrorKind,
};

/// Execute one command against the studio, printing results to stdout.
pub async fn run_command(studio: &Studio, command: Commands) -> StoryboardResult<()> {
    match command {
        Commands::Project(cmd) => handle_project_command(studio, cmd).await,

        Commands::Idea { topic, apply } => {
            let idea = studio.suggest_idea(topic.as_deref()).await?;
            println!("Name:       {}", idea.name);
            println!("Type:       {}", idea.video_type);
            println!("Style:      {}", idea.style.label());
            println!("Story idea: {}", idea.story_idea);
            println!("Characters:");
            for character in &idea.characters {
                println!("  {}", character.directive_line());
            }
            if apply {
                let project = studio.apply_idea(idea).await?;
                println!("\nCreated project {}", project.id);
            }
            Ok(())
        }

        Commands::Script { project } => {
            let project = studio.generate_script(&project).await?;
            println!("Generated {} scenes for '{}'", project.scenes.len(), project.name);
            print_scenes(&project);
            Ok(())
        }

        Commands::Preview(args) => handle_preview(studio, args).await,

        Commands::Characters(cmd) => handle_character_command(studio, cmd).await,

        Commands::Scene(cmd) => handle_scene_command(studio, cmd).await,

        Commands::Export { project, out } => {
            let path = studio.export(&project, &out).await?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

async fn handle_project_command(studio: &Studio, cmd: ProjectCommands) -> StoryboardResult<()> {
    match cmd {
        ProjectCommands::List => {
            let projects = studio.store().list().await;
            if projects.is_empty() {
                println!("No projects yet. Create one with `storyboard project create <name>`.");
            }
            for project in projects {
                let created = project
                    .created()
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!(
                    "{}  {:<24} {:<6} {:<12} {} scenes  {}",
                    project.id,
                    project.name,
                    project.video_type,
                    project.style,
                    project.scenes.len(),
                    created
                );
            }
            Ok(())
        }

        ProjectCommands::Show { project, json } => {
            let project = studio.store().get(&project).await?;
            if json {
                let text = serde_json::to_string_pretty(&project)
                    .map_err(|e| WorkflowError::new(WorkflowErrorKind::Json(e.to_string())))?;
                println!("{}", text);
            } else {
                println!("{} ({})", project.name, project.id);
                println!("Type:       {}", project.video_type);
                println!("Style:      {}", project.style.label());
                println!("Story idea: {}", project.story_idea);
                println!("Characters:");
                for character in &project.characters {
                    println!("  [{}] {}", character.id, character.directive_line());
                }
                print_scenes(&project);
            }
            Ok(())
        }

        ProjectCommands::Create {
            name,
            video_type,
            style,
            idea,
        } => {
            let draft = ProjectDraft::builder()
                .name(name)
                .video_type(video_type)
                .style(style)
                .story_idea(idea)
                .build()
                .map_err(incomplete_draft)?;
            let project = studio.create_project(draft).await?;
            println!("Created project {}", project.id);
            Ok(())
        }

        ProjectCommands::Delete { project } => {
            let removed = studio.store().delete(&project).await?;
            println!("Deleted '{}'", removed.name);
            Ok(())
        }
    }
}

async fn handle_preview(studio: &Studio, args: PreviewArgs) -> StoryboardResult<()> {
    match args.scene {
        Some(scene) if !args.all => {
            studio.generate_preview(&args.project, &scene).await?;
            println!("Generated preview for scene {}", scene);
        }
        _ => {
            let (project, outcomes) = studio.generate_all_previews(&args.project).await?;
            for outcome in &outcomes {
                let number = project
                    .scene(&outcome.scene_id)
                    .map(|s| s.scene_number.to_string())
                    .unwrap_or_else(|| outcome.scene_id.clone());
                match &outcome.result {
                    Ok(_) => println!("Scene {}: ok", number),
                    Err(e) => println!("Scene {}: failed ({})", number, e),
                }
            }
        }
    }
    Ok(())
}

async fn handle_scene_command(studio: &Studio, cmd: SceneCommands) -> StoryboardResult<()> {
    match cmd {
        SceneCommands::EditPrompt {
            project,
            scene,
            prompt,
        } => {
            let project = studio.edit_scene_prompt(&project, &scene, &prompt).await?;
            if project.scene(&scene).is_none() {
                println!("No scene {} in '{}'; nothing changed", scene, project.name);
            } else {
                println!("Updated prompt of scene {}", scene);
            }
            Ok(())
        }

        SceneCommands::ClearPending { project } => {
            let before = studio.store().get(&project).await?;
            let stale = before.scenes.iter().filter(|s| s.is_generating_image).count();
            let project = studio.reset_pending(&project).await?;
            println!("Cleared {} pending previews in '{}'", stale, project.name);
            Ok(())
        }
    }
}

async fn handle_character_command(
    studio: &Studio,
    cmd: CharacterCommands,
) -> StoryboardResult<()> {
    match cmd {
        CharacterCommands::Import { project, file } => {
            let text = tokio::fs::read_to_string(&file).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", file.display(), e)))
            })?;
            let before = studio.store().get(&project).await?.characters.len();
            let project = studio.import_characters(&project, &text).await?;
            println!(
                "Imported {} characters into '{}'",
                project.characters.len() - before,
                project.name
            );
            Ok(())
        }

        CharacterCommands::Export { project, out } => {
            let text = studio.export_characters(&project).await?;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, text).await.map_err(|e| {
                        let message = format!("{}: {}", path.display(), e);
                        StorageError::new(StorageErrorKind::FileWrite(message))
                    })?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", text),
            }
            Ok(())
        }

        CharacterCommands::Add {
            project,
            name,
            description,
            features,
            personality,
        } => {
            let draft = CharacterDraft::builder()
                .name(name)
                .description(description)
                .features(features)
                .personality(personality)
                .build()
                .map_err(incomplete_draft)?;
            let project = studio.add_character(&project, draft).await?;
            if let Some(character) = project.characters.last() {
                println!("Added character {} ({})", character.name, character.id);
            }
            Ok(())
        }

        CharacterCommands::Remove { project, character } => {
            let project = studio.remove_character(&project, &character).await?;
            println!("'{}' now has {} characters", project.name, project.characters.len());
            Ok(())
        }
    }
}

fn incomplete_draft(e: impl std::fmt::Display) -> WorkflowError {
    WorkflowError::new(WorkflowErrorKind::IncompleteDraft(e.to_string()))
}

fn print_scenes(project: &Project) {
    if project.scenes.is_empty() {
        println!("No scenes yet. Generate them with `storyboard script {}`.", project.id);
        return;
    }
    for scene in project.scenes_in_order() {
        let image = if scene.has_image() { "image" } else { "no image" };
        let status = if scene.is_generating_image { ", pending" } else { "" };
        println!(
            "\nScene {} [{}] ({}, {}{})",
            scene.scene_number, scene.id, scene.duration, image, status
        );
        println!("  Script: {}", scene.script);
        println!("  Prompt: {}", scene.visual_prompt);
    }
}
