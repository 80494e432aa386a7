//! Scene list editing.

use storyboard_core::Scene;

fn map_scene(scenes: &[Scene], id: &str, edit: impl Fn(&mut Scene)) -> Vec<Scene> {
    scenes
        .iter()
        .map(|scene| {
            let mut scene = scene.clone();
            if scene.id == id {
                edit(&mut scene);
            }
            scene
        })
        .collect()
}

/// Replace the visual prompt of scene `id`; no-op if absent.
pub fn edit_scene_prompt(scenes: &[Scene], id: &str, text: &str) -> Vec<Scene> {
    map_scene(scenes, id, |scene| scene.visual_prompt = text.to_string())
}

/// Store a preview image on scene `id` and clear its pending flag; no-op if absent.
pub fn set_scene_image(scenes: &[Scene], id: &str, image: &str) -> Vec<Scene> {
    map_scene(scenes, id, |scene| {
        scene.image_data = Some(image.to_string());
        scene.is_generating_image = false;
    })
}

/// Mark scene `id` as having a preview request in flight, or not.
pub fn set_scene_pending(scenes: &[Scene], id: &str, pending: bool) -> Vec<Scene> {
    map_scene(scenes, id, |scene| scene.is_generating_image = pending)
}
