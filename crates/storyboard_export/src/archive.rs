//! Zip assembly.

use crate::{MANIFEST_FILE_NAME, archive_file_name, image_file_name, manifest};
use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use storyboard_core::{DataUri, Project};
use storyboard_error::{ExportError, ExportErrorKind, StoryboardResult};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A finished archive held in memory.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ExportArchive {
    /// Suggested file name, derived from the project name
    file_name: String,
    /// Zip bytes
    bytes: Vec<u8>,
    /// Entry names in write order
    entries: Vec<String>,
}

impl ExportArchive {
    /// Write the archive into `dir` under its file name.
    ///
    /// # Errors
    ///
    /// Returns an export `Write` error if the directory or file cannot be written.
    #[tracing::instrument(skip(self), fields(file_name = %self.file_name, size = self.bytes.len()))]
    pub async fn write_to(&self, dir: &Path) -> StoryboardResult<PathBuf> {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            ExportError::new(ExportErrorKind::Write(format!("{}: {}", dir.display(), e)))
        })?;

        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await.map_err(|e| {
            ExportError::new(ExportErrorKind::Write(format!("{}: {}", path.display(), e)))
        })?;

        tracing::info!(path = %path.display(), "Wrote archive");
        Ok(path)
    }
}

/// Build the asset archive for a project.
///
/// # Errors
///
/// - `NoScenes` if the project has no scenes
/// - `DuplicateSceneNumber` if two scenes share a number
/// - `Decode` if a scene's image is not a valid base64 data URI
/// - `Archive` if the zip cannot be assembled
#[tracing::instrument(
    skip(project),
    fields(project_id = %project.id, scenes = project.scenes.len())
)]
pub fn export_assets(project: &Project) -> StoryboardResult<ExportArchive> {
    if project.scenes.is_empty() {
        return Err(ExportError::new(ExportErrorKind::NoScenes(project.name.clone())).into());
    }

    let mut seen = HashSet::new();
    for scene in &project.scenes {
        if !seen.insert(scene.scene_number) {
            return Err(
                ExportError::new(ExportErrorKind::DuplicateSceneNumber(scene.scene_number)).into(),
            );
        }
    }

    // Decode everything before writing so a bad image leaves no partial archive
    let mut images = Vec::new();
    for scene in project.scenes_in_order() {
        let Some(uri) = scene.image_data.as_deref() else {
            continue;
        };
        let bytes = DataUri::parse(uri)
            .and_then(|parsed| parsed.decode())
            .map_err(|e| {
                ExportError::new(ExportErrorKind::Decode {
                    scene_number: scene.scene_number,
                    message: e.to_string(),
                })
            })?;
        images.push((image_file_name(scene.scene_number), bytes));
    }

    let manifest_text = manifest(project);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::with_capacity(images.len() + 1);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    zip.start_file(MANIFEST_FILE_NAME, options)
        .map_err(|e| archive_error(MANIFEST_FILE_NAME, e))?;
    zip.write_all(manifest_text.as_bytes())
        .map_err(|e| archive_error(MANIFEST_FILE_NAME, e))?;
    entries.push(MANIFEST_FILE_NAME.to_string());

    for (name, bytes) in images {
        zip.start_file(name.as_str(), options)
            .map_err(|e| archive_error(&name, e))?;
        zip.write_all(&bytes).map_err(|e| archive_error(&name, e))?;
        entries.push(name);
    }

    let cursor = zip
        .finish()
        .map_err(|e| archive_error("central directory", e))?;

    let archive = ExportArchive {
        file_name: archive_file_name(&project.name),
        bytes: cursor.into_inner(),
        entries,
    };
    tracing::info!(entries = archive.entries.len(), size = archive.bytes.len(), "Built archive");
    Ok(archive)
}

#[track_caller]
fn archive_error(entry: &str, e: impl std::fmt::Display) -> ExportError {
    ExportError::new(ExportErrorKind::Archive(format!("{}: {}", entry, e)))
}
