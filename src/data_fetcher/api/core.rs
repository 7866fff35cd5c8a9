//! Cached, failover-aware match fetching

use chrono::{DateTime, Local};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use super::fallback::FallbackSource;
use super::fetch_utils::fetch_matches;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_primary_url;
use crate::config::{Config, SettingsHandle};
use crate::data_fetcher::cache::MatchCache;
use crate::data_fetcher::models::MatchRecord;
use crate::error::AppError;

/// Owns the HTTP client and the match cache.
///
/// Settings are read from the [`SettingsHandle`] on every fetch, so endpoint
/// or key changes apply from the next cache miss on. Concurrent callers are
/// coalesced: while one fetch is on the wire the others wait for it and are
/// then served from the refreshed cache.
#[derive(Debug)]
pub struct MatchFetcher {
    client: Client,
    settings: SettingsHandle,
    cache: Mutex<MatchCache>,
    in_flight: Mutex<()>,
}

impl MatchFetcher {
    /// Creates a fetcher with a client built from the current settings
    pub fn new(settings: SettingsHandle) -> Result<Self, AppError> {
        let timeout = settings.snapshot().http_timeout().as_secs();
        let client = create_http_client_with_timeout(timeout)?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: SettingsHandle) -> Self {
        Self {
            client,
            settings,
            cache: Mutex::new(MatchCache::default()),
            in_flight: Mutex::new(()),
        }
    }

    /// Overrides the cache TTL (15 s by default)
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = Mutex::new(MatchCache::new(ttl));
        self
    }

    /// Returns live matches from the cache, the primary endpoint or the
    /// fallback source, in that order.
    ///
    /// An empty result from every source is reported as
    /// [`AppError::NoMatchesFound`]; primary and fallback failures are logged
    /// and never returned directly.
    #[instrument(skip(self))]
    pub async fn fetch_live_matches(&self) -> Result<Vec<MatchRecord>, AppError> {
        if let Some(cached) = self.cache.lock().await.get_valid() {
            debug!("Returning {} cached matches", cached.len());
            return Ok(cached);
        }

        let _in_flight = self.in_flight.lock().await;

        // A coalesced caller finds the result of the fetch it waited on
        if let Some(cached) = self.cache.lock().await.get_valid() {
            debug!("Returning {} matches fetched by a concurrent caller", cached.len());
            return Ok(cached);
        }

        let config = self.settings.snapshot();

        let mut matches = self.fetch_from_primary(&config).await;
        if matches.is_empty() {
            info!("Primary source returned no matches, trying fallback");
            matches = FallbackSource::from_config(&config).fetch(&self.client).await;
        }

        if matches.is_empty() {
            warn!("No matches from primary or fallback source");
            return Err(AppError::NoMatchesFound);
        }

        info!("Fetched {} matches", matches.len());
        self.cache.lock().await.store(matches.clone());
        Ok(matches)
    }

    /// Runs [`fetch_live_matches`](Self::fetch_live_matches) on a worker task
    /// so the caller never waits on the network.
    pub fn spawn_fetch(self: &Arc<Self>) -> JoinHandle<Result<Vec<MatchRecord>, AppError>> {
        let fetcher = Arc::clone(self);
        tokio::spawn(async move { fetcher.fetch_live_matches().await })
    }

    async fn fetch_from_primary(&self, config: &Config) -> Vec<MatchRecord> {
        let url = build_primary_url(config.primary_api_url(), config.api_key.as_deref());

        match fetch_matches(&self.client, &url).await {
            Ok(matches) => {
                debug!("Primary source returned {} matches", matches.len());
                matches
            }
            Err(e) => {
                warn!("Primary source failed: {e}");
                Vec::new()
            }
        }
    }

    /// Drops the cached list so the next fetch goes to the network
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    /// Wall-clock time of the last successful fetch
    pub async fn last_fetched_at(&self) -> Option<DateTime<Local>> {
        self.cache.lock().await.last_fetched_at()
    }
}
