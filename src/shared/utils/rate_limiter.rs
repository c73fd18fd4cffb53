use async_trait::async_trait;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::time::Duration;

type DirectLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

/// Pause taken after each completed identifier
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn wait(&self);
}

/// Minimum-interval limiter: each `wait` returns no earlier than
/// `min_interval` after the previous one, and the first no earlier than
/// `min_interval` after construction.
pub struct RateLimiter {
    limiter: Option<DirectLimiter>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        // A zero period has no quota, which means no throttling at all
        let limiter = Quota::with_period(min_interval).map(|quota| {
            let limiter = DirectLimiter::direct(quota);
            // Spend the initial burst so the first wait is a full interval
            let _ = limiter.check();
            limiter
        });
        Self {
            limiter,
            min_interval,
        }
    }

    pub fn unthrottled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[async_trait]
impl Throttle for RateLimiter {
    async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}
