//! Rate limiter implementation using governor and Tokio Semaphore.
//!
//! - Governor (GCRA) enforces requests per minute
//! - A Tokio Semaphore enforces the concurrent request limit

use crate::LimitConfig;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::trace;

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Coordinates requests per minute and in-flight request limits.
///
/// Cloning shares the underlying quotas.
///
/// # Example
///
/// ```rust
/// use storyboard_rate_limit::{LimitConfig, RequestLimiter};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let limiter = RequestLimiter::new(LimitConfig { rpm: None, max_concurrent: Some(1) });
/// let guard = limiter.acquire().await?;
/// assert_eq!(limiter.available_permits(), 0);
/// drop(guard);
/// assert_eq!(limiter.available_permits(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RequestLimiter {
    config: LimitConfig,
    rpm_limiter: Option<Arc<DirectRateLimiter>>,
    concurrent_semaphore: Arc<Semaphore>,
}

impl std::fmt::Debug for RequestLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestLimiter")
            .field("config", &self.config)
            .field("available_permits", &self.available_permits())
            .finish_non_exhaustive()
    }
}

impl RequestLimiter {
    /// Create a limiter enforcing every non-`None` limit in the config.
    ///
    /// A zero `max_concurrent` is treated as one.
    pub fn new(config: LimitConfig) -> Self {
        let rpm_limiter = config.rpm.and_then(|rpm| {
            NonZeroU32::new(rpm)
                .map(|n| Arc::new(GovernorRateLimiter::direct(Quota::per_minute(n))))
        });

        let max_concurrent = config
            .max_concurrent
            .map(|n| n.max(1) as usize)
            .unwrap_or(Semaphore::MAX_PERMITS);

        Self {
            config,
            rpm_limiter,
            concurrent_semaphore: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Limits this limiter enforces.
    pub fn config(&self) -> &LimitConfig {
        &self.config
    }

    /// Wait until a request may start.
    ///
    /// Returns a guard that releases the in-flight slot when dropped.
    pub async fn acquire(&self) -> StoryboardResult<RequestLimiterGuard> {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.until_ready().await;
        }

        // Acquire concurrent slot last to avoid holding it while waiting on RPM
        let permit = self
            .concurrent_semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::upstream(
                    None,
                    format!("request limiter closed: {}", e),
                ))
            })?;

        trace!(
            available = self.concurrent_semaphore.available_permits(),
            "Request slot acquired"
        );
        Ok(RequestLimiterGuard { _permit: permit })
    }

    /// Try to start a request without waiting.
    ///
    /// Returns `None` if any limit would be exceeded.
    pub fn try_acquire(&self) -> Option<RequestLimiterGuard> {
        if let Some(limiter) = &self.rpm_limiter {
            if limiter.check().is_err() {
                return None;
            }
        }

        self.concurrent_semaphore
            .clone()
            .try_acquire_owned()
            .ok()
            .map(|permit| RequestLimiterGuard { _permit: permit })
    }

    /// Free in-flight slots.
    pub fn available_permits(&self) -> usize {
        self.concurrent_semaphore.available_permits()
    }
}

/// Holds an in-flight slot until dropped.
#[derive(Debug)]
pub struct RequestLimiterGuard {
    _permit: OwnedSemaphorePermit,
}
