//! Core API rate limit handling.
//!
//! Listing pages, trees and file contents all draw from GitHub's core quota.
//! Before the expensive calls the source checks the remaining budget and sleeps
//! until the window resets when it is nearly exhausted.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Checks the current rate limit status for the core API.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Returns how long to sleep before `needed` more requests, if at all.
///
/// A batch larger than the whole window only asks for what one window can give.
fn wait_duration(info: &RateLimitInfo, needed: u32, now: u64) -> Option<u64> {
    let needed = needed.min(info.limit.saturating_sub(MIN_REMAINING_THRESHOLD));
    if info.remaining >= needed.saturating_add(MIN_REMAINING_THRESHOLD) || info.reset <= now {
        return None;
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        warn!(
            wait_secs,
            max_wait = MAX_WAIT_SECS,
            "Rate limit reset too far in future, capping wait time"
        );
    }
    Some(wait_secs.min(MAX_WAIT_SECS))
}

/// Waits if the rate limit is low, returning true if we waited.
pub async fn wait_if_needed(info: &RateLimitInfo) -> bool {
    wait_for_budget(info, 0).await
}

/// Waits until `needed` requests fit in the remaining budget, returning true
/// if we waited.
pub async fn wait_for_budget(info: &RateLimitInfo, needed: u32) -> bool {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(wait_secs) = wait_duration(info, needed, now) else {
        return false;
    };

    info!(
        remaining = info.remaining,
        needed,
        wait_secs,
        "Rate limit low, waiting for reset"
    );
    tokio::time::sleep(Duration::from_secs(wait_secs)).await;
    true
}

/// Ensures sufficient rate limit before making core API calls.
///
/// # Errors
///
/// Returns an error if the rate limit check fails.
pub async fn ensure_core_rate_limit(octocrab: &Octocrab) -> Result<(), octocrab::Error> {
    ensure_core_budget(octocrab, 0).await
}

/// Ensures a batch of `needed` core API calls fits in the current window.
///
/// # Errors
///
/// Returns an error if the rate limit check fails.
pub async fn ensure_core_budget(octocrab: &Octocrab, needed: u32) -> Result<(), octocrab::Error> {
    let info = check_core_rate_limit(octocrab).await?;
    wait_for_budget(&info, needed).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_wait_with_budget_left() {
        let info = RateLimitInfo {
            remaining: 100,
            reset: 0,
            limit: 5000,
        };

        assert!(!wait_if_needed(&info).await);
    }

    #[tokio::test]
    async fn no_wait_once_reset_passed() {
        let info = RateLimitInfo {
            remaining: 1,
            reset: 0,
            limit: 5000,
        };

        assert!(!wait_if_needed(&info).await);
    }

    #[test]
    fn waits_until_reset_when_exhausted() {
        let info = RateLimitInfo {
            remaining: 2,
            reset: 1_000_120,
            limit: 5000,
        };

        assert_eq!(wait_duration(&info, 0, 1_000_000), Some(120));
    }

    #[test]
    fn caps_wait_time() {
        let info = RateLimitInfo {
            remaining: 0,
            reset: 1_000_000 + MAX_WAIT_SECS * 3,
            limit: 5000,
        };

        assert_eq!(wait_duration(&info, 0, 1_000_000), Some(MAX_WAIT_SECS));
    }

    #[test]
    fn waits_when_batch_exceeds_budget() {
        let info = RateLimitInfo {
            remaining: 40,
            reset: 1_000_060,
            limit: 5000,
        };

        assert_eq!(wait_duration(&info, 30, 1_000_000), None);
        assert_eq!(wait_duration(&info, 50, 1_000_000), Some(60));
    }

    #[test]
    fn oversized_batch_waits_only_for_full_window() {
        let info = RateLimitInfo {
            remaining: 5000,
            reset: 1_000_060,
            limit: 5000,
        };

        assert_eq!(wait_duration(&info, 20_000, 1_000_000), None);
    }
}
