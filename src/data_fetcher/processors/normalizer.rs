//! Turns a raw API payload into [`MatchRecord`]s.
//!
//! Parsing never fails as a whole: an unreadable payload yields an empty
//! list and an unreadable record is skipped while the rest are kept.

use serde_json::Value;
use tracing::{debug, warn};

use super::run_rates::{calculate_run_rates, is_live_status};
use crate::data_fetcher::models::{ApiMatch, ApiTeamScore, LiveMatchesResponse, MatchRecord};

/// Parses a raw payload into match records.
///
/// # Example
/// ```
/// use cricket_glyph::data_fetcher::processors::parse_matches;
///
/// let payload = r#"{"data":[{"teams":["India","Australia"],"status":"Live",
///     "score":{"team":[{"runs":185,"wickets":5,"overs":20.0}]}}]}"#;
/// let matches = parse_matches(payload);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].current_run_rate, 9.25);
/// ```
pub fn parse_matches(raw_payload: &str) -> Vec<MatchRecord> {
    let response = match serde_json::from_str::<LiveMatchesResponse>(raw_payload) {
        Ok(response) => response,
        Err(e) => {
            warn!("Unreadable live matches payload: {e}");
            return Vec::new();
        }
    };

    let total = response.data.len();
    let matches: Vec<MatchRecord> = response
        .data
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| parse_match_value(index, value))
        .collect();

    if matches.len() < total {
        warn!("Skipped {} of {} match records", total - matches.len(), total);
    }
    debug!("Normalized {} match records", matches.len());

    matches
}

fn parse_match_value(index: usize, value: Value) -> Option<MatchRecord> {
    match serde_json::from_value::<ApiMatch>(value) {
        Ok(api_match) => {
            let record = normalize_match(api_match);
            debug!(
                "Parsed match: {} vs {}",
                record.team1.as_deref().unwrap_or("?"),
                record.team2.as_deref().unwrap_or("?")
            );
            Some(record)
        }
        Err(e) => {
            warn!("Skipping match record {index}: {e}");
            None
        }
    }
}

/// Builds a record from one API entry and derives its statistics
pub fn normalize_match(api_match: ApiMatch) -> MatchRecord {
    let mut record = MatchRecord {
        is_live: is_live_status(&api_match.status),
        id: api_match.id,
        name: api_match.name,
        match_type: api_match.match_type,
        status: api_match.status,
        venue: api_match.venue,
        ..Default::default()
    };

    if let Some(teams) = api_match.teams
        && teams.len() >= 2
    {
        let mut teams = teams.into_iter();
        record.team1 = teams.next();
        record.team2 = teams.next();
    }

    let innings = api_match
        .score
        .and_then(|score| score.team)
        .unwrap_or_default();
    if let Some(first) = innings.first() {
        (record.runs1, record.wickets1, record.overs1) = innings_line(first);
    }
    if let Some(second) = innings.get(1) {
        (record.runs2, record.wickets2, record.overs2) = innings_line(second);
    }

    calculate_run_rates(&mut record);
    record
}

/// A reported innings line: missing keys count as zero, unreadable values
/// stay absent.
fn innings_line(score: &ApiTeamScore) -> (Option<u32>, Option<u32>, Option<f64>) {
    (
        parse_count(score.runs.as_ref()),
        parse_count(score.wickets.as_ref()),
        parse_overs(score.overs.as_ref()),
    )
}

fn parse_count(value: Option<&Value>) -> Option<u32> {
    match value {
        None | Some(Value::Null) => Some(0),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(n) => u32::try_from(n).ok(),
            None => n.as_f64().and_then(whole_count),
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<u32>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_count))
        }
        Some(_) => None,
    }
}

/// Accepts `185.0` as 185; fractional or negative values are unreadable
fn whole_count(value: f64) -> Option<u32> {
    let in_range = value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX);
    (in_range && value.fract() == 0.0).then_some(value as u32)
}

fn parse_overs(value: Option<&Value>) -> Option<f64> {
    let overs = match value {
        None | Some(Value::Null) => Some(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }?;
    (overs.is_finite() && overs >= 0.0).then_some(overs)
}
