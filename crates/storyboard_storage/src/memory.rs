//! In-process persistence for tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use storyboard_core::Project;
use storyboard_error::{StorageError, StorageErrorKind, StoryboardResult};
use storyboard_interface::ProjectPersistence;

/// Holds the last serialized snapshot in memory.
///
/// Snapshots are stored as JSON text so loading exercises the same decoding
/// path as the filesystem backend.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    raw: Mutex<Option<String>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryPersistence {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with raw text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current slot contents.
    pub fn raw(&self) -> Option<String> {
        match self.raw.lock() {
            Ok(raw) => raw.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectPersistence for InMemoryPersistence {
    async fn load(&self) -> StoryboardResult<Option<Vec<Project>>> {
        let Some(raw) = self.raw() else {
            return Ok(None);
        };
        let projects = serde_json::from_str(&raw).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!("memory slot: {}", e)))
        })?;
        Ok(Some(projects))
    }

    async fn save(&self, projects: &[Project]) -> StoryboardResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::Write(
                "simulated write failure".to_string(),
            ))
            .into());
        }

        let text = serde_json::to_string(projects).map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "Failed to serialize projects: {}",
                e
            )))
        })?;
        match self.raw.lock() {
            Ok(mut raw) => *raw = Some(text),
            Err(poisoned) => *poisoned.into_inner() = Some(text),
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
