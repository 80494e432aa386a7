//! Character and scene editing.
//!
//! Every function borrows its input and returns a new collection; callers
//! commit the result through the project store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod characters;
mod scenes;

pub use characters::{
    CharacterPatch, CharacterPatchBuilder, add_character, edit_character, export_characters,
    import_characters, remove_character,
};
pub use scenes::{edit_scene_prompt, set_scene_image, set_scene_pending};
