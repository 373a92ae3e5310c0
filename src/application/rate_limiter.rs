/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request pacing for the KIS REST API
//!
//! KIS rejects bursts above roughly 20 calls per second on live accounts and
//! 2 per second on simulated ones. Every request waits here first.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket shared by every request of one client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
    replenish: Duration,
    burst: u32,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// One cell is replenished every `period_seconds / max_requests`; at most
    /// `burst_size` requests can go out back to back.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use kis_overseas_client::application::config::{RateLimiterConfig, TradingMode};
    /// use kis_overseas_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig::for_mode(TradingMode::Paper));
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = config.max_requests.max(1);
        let period = Duration::from_secs(config.period_seconds.max(1));
        let replenish = (period / max_requests).max(Duration::from_millis(1));

        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
            replenish,
            burst: burst_size.get(),
        }
    }

    /// Waits for the next free cell
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Time between two replenished cells
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.replenish
    }

    /// Checks if a request can be made immediately, consuming a cell when it can
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("interval", &self.replenish)
            .field("burst", &self.burst)
            .finish()
    }
}
