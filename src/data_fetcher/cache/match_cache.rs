//! Single-slot cache of the last successful match list

use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::{debug, info};

use super::types::CacheEntry;
use crate::constants::cache_ttl;
use crate::data_fetcher::models::MatchRecord;

#[derive(Debug)]
pub struct MatchCache {
    entry: Option<CacheEntry>,
    ttl: Duration,
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new(Duration::from_millis(cache_ttl::MATCH_LIST_MS))
    }
}

impl MatchCache {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// Returns a copy of the cached list while it is still valid
    pub fn get_valid(&self) -> Option<Vec<MatchRecord>> {
        match &self.entry {
            Some(entry) if entry.is_valid(self.ttl) => {
                debug!(
                    "Cache hit: {} matches, expires in {:?}",
                    entry.matches.len(),
                    entry.time_until_expiry(self.ttl)
                );
                Some(entry.matches.clone())
            }
            Some(_) => {
                debug!("Cache entry stale or empty");
                None
            }
            None => {
                debug!("Cache miss: nothing cached yet");
                None
            }
        }
    }

    /// Replaces the slot. Empty lists are not cached.
    pub fn store(&mut self, matches: Vec<MatchRecord>) {
        if matches.is_empty() {
            debug!("Not caching an empty match list");
            return;
        }
        info!("Caching {} matches for {:?}", matches.len(), self.ttl);
        self.entry = Some(CacheEntry::new(matches));
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn last_fetched_at(&self) -> Option<DateTime<Local>> {
        self.entry.as_ref().map(|entry| entry.fetched_at)
    }
}
