//! Limit configuration.

use serde::{Deserialize, Serialize};

/// Request limits for one driver.
///
/// `None` means unlimited.
///
/// ```toml
/// [limits]
/// rpm = 10
/// max_concurrent = 2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct LimitConfig {
    /// Requests per minute
    #[serde(default)]
    pub rpm: Option<u32>,

    /// Maximum requests in flight at once
    #[serde(default)]
    pub max_concurrent: Option<u32>,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            rpm: Some(10),
            max_concurrent: Some(2),
        }
    }
}

impl LimitConfig {
    /// No limits at all.
    pub fn unlimited() -> Self {
        Self {
            rpm: None,
            max_concurrent: None,
        }
    }
}
