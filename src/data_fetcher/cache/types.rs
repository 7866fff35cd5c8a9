//! Cache data structures with TTL support

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::data_fetcher::models::MatchRecord;

/// The last successful match list and when it was fetched
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub matches: Vec<MatchRecord>,
    pub cached_at: Instant,
    /// Wall-clock time of the fetch, for display
    pub fetched_at: DateTime<Local>,
}

impl CacheEntry {
    /// Creates a new cache entry stamped with the current time
    pub fn new(matches: Vec<MatchRecord>) -> Self {
        Self {
            matches,
            cached_at: Instant::now(),
            fetched_at: Local::now(),
        }
    }

    /// A hit needs a non-empty list younger than `ttl` at `now`
    pub fn is_valid_at(&self, now: Instant, ttl: Duration) -> bool {
        let age = now.saturating_duration_since(self.cached_at);
        let is_valid = age < ttl && !self.matches.is_empty();

        debug!(
            "Cache validity check: age={:?}, ttl={:?}, matches={}, is_valid={}",
            age,
            ttl,
            self.matches.len(),
            is_valid
        );

        is_valid
    }

    pub fn is_valid(&self, ttl: Duration) -> bool {
        self.is_valid_at(Instant::now(), ttl)
    }

    /// Gets the remaining time until expiration
    pub fn time_until_expiry(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.cached_at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    const TTL: Duration = Duration::from_millis(15_000);

    #[test]
    fn test_fresh_non_empty_entry_is_valid() {
        let entry = CacheEntry::new(vec![TestDataBuilder::create_match("India", "Australia")]);
        assert!(entry.is_valid(TTL));
        assert!(entry.time_until_expiry(TTL) > Duration::from_secs(14));
    }

    #[test]
    fn test_empty_entry_is_never_valid() {
        let entry = CacheEntry::new(Vec::new());
        assert!(!entry.is_valid(TTL));
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let entry = CacheEntry::new(vec![TestDataBuilder::create_match("India", "Australia")]);
        let just_before = entry.cached_at + Duration::from_millis(14_999);
        let at_ttl = entry.cached_at + TTL;

        assert!(entry.is_valid_at(just_before, TTL));
        assert!(!entry.is_valid_at(at_ttl, TTL));
    }
}
