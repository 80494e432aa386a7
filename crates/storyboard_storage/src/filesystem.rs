//! Filesystem snapshot persistence.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use storyboard_core::Project;
use storyboard_error::{StorageError, StorageErrorKind, StoryboardResult};
use storyboard_interface::ProjectPersistence;

/// Default snapshot file name.
pub const DEFAULT_SLOT: &str = "projects.json";

/// Stores the project list as one pretty-printed JSON file.
///
/// Writes go to `{slot}.tmp` first and are renamed over the slot, so a crash
/// mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileSystemPersistence {
    dir: PathBuf,
    slot: String,
}

impl FileSystemPersistence {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryCreation` if the directory cannot be created.
    #[tracing::instrument(skip(dir, slot))]
    pub fn new(dir: impl Into<PathBuf>, slot: impl Into<String>) -> StoryboardResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let slot = slot.into();
        tracing::debug!(dir = %dir.display(), slot = %slot, "Opened filesystem persistence");
        Ok(Self { dir, slot })
    }

    /// Full path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.slot)
    }

    fn tmp_path(&self) -> PathBuf {
        self.dir.join(format!("{}.tmp", self.slot))
    }

    async fn replace(tmp: &Path, target: &Path) -> std::io::Result<()> {
        match tokio::fs::rename(tmp, target).await {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                // Some platforms refuse to rename over an existing file
                if tokio::fs::try_exists(target).await.unwrap_or(false) {
                    tokio::fs::remove_file(target).await?;
                    tokio::fs::rename(tmp, target).await
                } else {
                    Err(rename_err)
                }
            }
        }
    }
}

#[async_trait]
impl ProjectPersistence for FileSystemPersistence {
    #[tracing::instrument(skip(self), fields(path = %self.path().display()))]
    async fn load(&self) -> StoryboardResult<Option<Vec<Project>>> {
        let path = self.path();
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No snapshot yet");
                return Ok(None);
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::Read(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        let projects: Vec<Project> = serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        tracing::debug!(count = projects.len(), "Loaded snapshot");
        Ok(Some(projects))
    }

    #[tracing::instrument(skip(self, projects), fields(count = projects.len()))]
    async fn save(&self, projects: &[Project]) -> StoryboardResult<()> {
        let bytes = serde_json::to_vec_pretty(projects).map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "Failed to serialize projects: {}",
                e
            )))
        })?;

        let tmp = self.tmp_path();
        let target = self.path();
        tokio::fs::write(&tmp, &bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!("{}: {}", tmp.display(), e)))
        })?;
        Self::replace(&tmp, &target).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "{}: {}",
                target.display(),
                e
            )))
        })?;

        tracing::debug!(path = %target.display(), size = bytes.len(), "Wrote snapshot");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
