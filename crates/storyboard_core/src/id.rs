//! Identifier issuing.
//!
//! Every identifier in a project comes from one injected [`IdIssuer`], so tests
//! can swap in a [`SequentialIssuer`] and get deterministic output.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh identifiers for projects, characters and scenes.
pub trait IdIssuer: Send + Sync + std::fmt::Debug {
    /// Issue a new identifier, distinct from every one issued before.
    fn issue(&self) -> String;
}

/// Random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIssuer;

impl IdIssuer for UuidIssuer {
    fn issue(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `{prefix}-{n}` identifiers, starting at 1.
///
/// # Examples
///
/// ```
/// use storyboard_core::{IdIssuer, SequentialIssuer};
///
/// let ids = SequentialIssuer::new("scene");
/// assert_eq!(ids.issue(), "scene-1");
/// assert_eq!(ids.issue(), "scene-2");
/// ```
#[derive(Debug)]
pub struct SequentialIssuer {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIssuer {
    /// Create an issuer with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdIssuer for SequentialIssuer {
    fn issue(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
