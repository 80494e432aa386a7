//! Scene editing.

use storyboard_core::Scene;
use storyboard_editor::{edit_scene_prompt, set_scene_image, set_scene_pending};

fn scenes() -> Vec<Scene> {
    (1..=3)
        .map(|n| Scene {
            id: format!("s{}", n),
            scene_number: n,
            script: format!("Line {}", n),
            visual_prompt: format!("Prompt {}", n),
            duration: "3s".to_string(),
            image_data: None,
            is_generating_image: false,
        })
        .collect()
}

#[test]
fn test_edit_prompt_touches_only_target() {
    let original = scenes();

    let edited = edit_scene_prompt(&original, "s2", "A fox on a hill, Anime style");

    assert_eq!(edited[1].visual_prompt, "A fox on a hill, Anime style");
    assert_eq!(edited[0], original[0]);
    assert_eq!(edited[2], original[2]);
    assert_eq!(original[1].visual_prompt, "Prompt 2");
}

#[test]
fn test_pending_then_image_clears_flag() {
    let pending = set_scene_pending(&scenes(), "s1", true);
    assert!(pending[0].is_generating_image);

    let done = set_scene_image(&pending, "s1", "data:image/png;base64,cG5n");

    assert_eq!(done[0].image_data.as_deref(), Some("data:image/png;base64,cG5n"));
    assert!(!done[0].is_generating_image);
    assert!(done[0].has_image());
}

#[test]
fn test_absent_scene_is_noop() {
    let original = scenes();

    assert_eq!(edit_scene_prompt(&original, "nope", "x"), original);
    assert_eq!(set_scene_image(&original, "nope", "data:image/png;base64,AA=="), original);
    assert_eq!(set_scene_pending(&original, "nope", true), original);
}
