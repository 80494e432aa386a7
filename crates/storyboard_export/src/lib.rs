//! Asset export for Storyboard projects.
//!
//! A project exports to a single zip archive holding a `script.txt`
//! manifest plus one PNG per scene that has a generated preview.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod manifest;
mod naming;

pub use archive::{ExportArchive, export_assets};
pub use manifest::{MANIFEST_FILE_NAME, NO_IMAGE_PLACEHOLDER, manifest};
pub use naming::{archive_file_name, image_file_name};
