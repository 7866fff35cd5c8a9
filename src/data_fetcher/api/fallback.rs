//! Secondary data sources used when the primary endpoint has nothing.

use reqwest::Client;
use tracing::{info, warn};

use super::fetch_utils::fetch_matches;
use crate::config::Config;
use crate::data_fetcher::models::MatchRecord;
use crate::data_fetcher::processors::{calculate_run_rates, is_live_status};

/// Where matches come from once the primary endpoint came back empty
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FallbackSource {
    /// Secondary endpoint, same payload format as the primary
    pub endpoint: Option<String>,
    /// Serve the fixed demonstration set as a last resort
    pub demo: bool,
}

impl FallbackSource {
    pub fn from_config(config: &Config) -> Self {
        Self {
            endpoint: config.fallback_api_url.clone(),
            demo: config.demo_fallback,
        }
    }

    /// Yields zero or more matches; failures are logged, never returned
    pub async fn fetch(&self, client: &Client) -> Vec<MatchRecord> {
        if let Some(endpoint) = &self.endpoint {
            info!("Trying fallback endpoint");
            match fetch_matches(client, endpoint).await {
                Ok(matches) if !matches.is_empty() => return matches,
                Ok(_) => info!("Fallback endpoint returned no matches"),
                Err(e) => warn!("Fallback endpoint failed: {e}"),
            }
        }

        if self.demo {
            info!("Using demonstration matches");
            return demo_matches();
        }

        Vec::new()
    }
}

/// Two fixed in-progress matches for offline use and demos.
///
/// Run rates come from the same derivation as live data.
pub fn demo_matches() -> Vec<MatchRecord> {
    let mut matches = vec![
        demo_match(
            "demo_1",
            "India vs Australia - T20",
            "T20",
            "Mumbai",
            ("India", 185, 5, 20.0),
            ("Australia", 142, 3, 15.2),
        ),
        demo_match(
            "demo_2",
            "England vs Pakistan - ODI",
            "ODI",
            "Lord's",
            ("England", 298, 7, 50.0),
            ("Pakistan", 165, 4, 32.3),
        ),
    ];
    matches.iter_mut().for_each(calculate_run_rates);
    matches
}

fn demo_match(
    id: &str,
    name: &str,
    match_type: &str,
    venue: &str,
    first: (&str, u32, u32, f64),
    second: (&str, u32, u32, f64),
) -> MatchRecord {
    let status = "In Progress".to_string();
    MatchRecord {
        id: id.to_string(),
        name: name.to_string(),
        match_type: match_type.to_string(),
        venue: venue.to_string(),
        team1: Some(first.0.to_string()),
        runs1: Some(first.1),
        wickets1: Some(first.2),
        overs1: Some(first.3),
        team2: Some(second.0.to_string()),
        runs2: Some(second.1),
        wickets2: Some(second.2),
        overs2: Some(second.3),
        is_live: is_live_status(&status),
        status,
        ..Default::default()
    }
}
