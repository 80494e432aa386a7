use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storyboard_rate_limit::{LimitConfig, RequestLimiter};

#[tokio::test]
async fn concurrent_limit_caps_in_flight_requests() {
    let limiter = RequestLimiter::new(LimitConfig {
        rpm: None,
        max_concurrent: Some(2),
    });
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<_> = (0..6)
        .map(|_| {
            let limiter = limiter.clone();
            let in_flight = in_flight.clone();
            let peak = peak.clone();
            tokio::spawn(async move {
                let _guard = limiter.acquire().await.unwrap();
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert!(peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(limiter.available_permits(), 2);
}

#[tokio::test]
async fn try_acquire_fails_when_slots_exhausted() {
    let limiter = RequestLimiter::new(LimitConfig {
        rpm: None,
        max_concurrent: Some(1),
    });

    let guard = limiter.try_acquire();
    assert!(guard.is_some());
    assert!(limiter.try_acquire().is_none());

    drop(guard);
    assert!(limiter.try_acquire().is_some());
}

#[tokio::test]
async fn rpm_limit_rejects_burst_beyond_quota() {
    let limiter = RequestLimiter::new(LimitConfig {
        rpm: Some(1),
        max_concurrent: None,
    });

    let first = limiter.try_acquire();
    assert!(first.is_some());
    drop(first);
    // Quota of one per minute is spent
    assert!(limiter.try_acquire().is_none());
}

#[test]
fn zero_concurrency_is_treated_as_one() {
    let limiter = RequestLimiter::new(LimitConfig {
        rpm: None,
        max_concurrent: Some(0),
    });
    assert_eq!(limiter.available_permits(), 1);
}

#[test]
fn default_limits_are_small() {
    let config = LimitConfig::default();
    assert_eq!(config.max_concurrent, Some(2));
    assert_eq!(config.rpm, Some(10));
    assert_eq!(LimitConfig::unlimited().rpm, None);
}
