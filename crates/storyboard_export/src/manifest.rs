//! The `script.txt` manifest.

use crate::image_file_name;
use storyboard_core::Project;

/// Manifest entry name.
pub const MANIFEST_FILE_NAME: &str = "script.txt";

/// Image line for scenes without a preview.
pub const NO_IMAGE_PLACEHOLDER: &str = "(no image generated)";

/// Render the manifest: project metadata, then every scene in scene-number order.
pub fn manifest(project: &Project) -> String {
    let mut lines = vec![
        format!("Project: {}", project.name),
        format!("Type: {}", project.video_type),
        format!("Style: {}", project.style.label()),
        format!("Story idea: {}", project.story_idea.trim()),
        String::new(),
        "Characters:".to_string(),
    ];
    if project.characters.is_empty() {
        lines.push("(none)".to_string());
    }
    lines.extend(project.characters.iter().map(|c| c.directive_line()));

    for scene in project.scenes_in_order() {
        let image = if scene.has_image() {
            image_file_name(scene.scene_number)
        } else {
            NO_IMAGE_PLACEHOLDER.to_string()
        };

        lines.push(String::new());
        lines.push(format!("Scene {} ({})", scene.scene_number, scene.duration));
        lines.push(format!("Script: {}", scene.script));
        lines.push(format!("Visual prompt: {}", scene.visual_prompt));
        lines.push(format!("Image: {}", image));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
