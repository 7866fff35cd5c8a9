//! Text shown for each display mode.
//!
//! Every function accepts incomplete records: a missing team becomes `TBD`
//! and a missing number becomes `-`.

use crate::data_fetcher::models::MatchRecord;

pub const LIVE_MARKER: &str = "🔴 LIVE: ";
pub const STATUS_PLACEHOLDER: &str = "Match in progress";
pub const NO_LIVE_MATCHES: &str = "No live matches";
pub const NO_FAVORITE_MATCHES: &str = "No matches for your favorite teams";
pub const LOADING_TEXT: &str = "Loading scores...";

const UNKNOWN_TEAM: &str = "TBD";
const MISSING_VALUE: &str = "-";

fn team_or_placeholder(team: &Option<String>) -> &str {
    team.as_deref().unwrap_or(UNKNOWN_TEAM)
}

fn count_or_placeholder(value: Option<u32>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}

/// Overs as reported. Whole overs keep one decimal (`20.0`), partial
/// overs are never rounded (`15.2`, `15.25`).
pub fn format_overs(overs: Option<f64>) -> String {
    match overs {
        None => MISSING_VALUE.to_string(),
        Some(o) if o.fract() == 0.0 => format!("{o:.1}"),
        Some(o) => o.to_string(),
    }
}

fn innings_score(runs: u32, wickets: Option<u32>, overs: Option<f64>) -> String {
    format!(
        "{runs}/{} ({})",
        count_or_placeholder(wickets),
        format_overs(overs)
    )
}

/// Score line, e.g. `🔴 LIVE: India 185/5 (20.0) vs Australia 142/3 (15.2) - Live`.
///
/// The second team's score is only shown once it was reported, and the
/// first team's score is skipped when the provider sent none.
pub fn format_score(record: &MatchRecord) -> String {
    let mut text = String::new();
    if record.is_live {
        text.push_str(LIVE_MARKER);
    }

    text.push_str(team_or_placeholder(&record.team1));
    if let Some(runs1) = record.runs1 {
        text.push(' ');
        text.push_str(&innings_score(runs1, record.wickets1, record.overs1));
    }

    text.push_str(" vs ");
    text.push_str(team_or_placeholder(&record.team2));
    if let Some(runs2) = record.runs2 {
        text.push(' ');
        text.push_str(&innings_score(runs2, record.wickets2, record.overs2));
    }

    if !record.status.is_empty() {
        text.push_str(" - ");
        text.push_str(&record.status);
    }
    text
}

pub fn format_run_rate(record: &MatchRecord) -> String {
    format!(
        "CRR: {:.2} | RRR: {:.2}",
        record.current_run_rate, record.required_run_rate
    )
}

pub fn format_overs_summary(record: &MatchRecord) -> String {
    format!(
        "{}: {} | {}: {}",
        team_or_placeholder(&record.team1),
        format_overs(record.overs1),
        team_or_placeholder(&record.team2),
        format_overs(record.overs2)
    )
}

pub fn format_status(record: &MatchRecord) -> String {
    if record.status.is_empty() {
        STATUS_PLACEHOLDER.to_string()
    } else {
        record.status.clone()
    }
}

pub fn format_error(description: &str) -> String {
    format!("⚠️ {description}")
}

/// Message for an empty list, depending on whether a favorite filter is active
pub fn no_matches_message(has_favorites: bool) -> &'static str {
    if has_favorites {
        NO_FAVORITE_MATCHES
    } else {
        NO_LIVE_MATCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_score_with_both_innings() {
        let record = TestDataBuilder::live_chase();
        assert_eq!(
            format_score(&record),
            "🔴 LIVE: India 185/5 (20.0) vs Australia 142/3 (15.2) - Live"
        );
    }

    #[test]
    fn test_score_without_second_innings() {
        let mut record = TestDataBuilder::live_chase();
        record.runs2 = None;
        record.is_live = false;
        record.status = String::new();
        assert_eq!(format_score(&record), "India 185/5 (20.0) vs Australia");
    }

    #[test]
    fn test_score_of_incomplete_record_uses_placeholders() {
        let record = MatchRecord::default();
        assert!(!record.is_complete());
        assert_eq!(format_score(&record), "TBD vs TBD");
    }

    #[test]
    fn test_run_rate_rounds_to_two_decimals() {
        let record = TestDataBuilder::live_chase();
        assert_eq!(format_run_rate(&record), "CRR: 9.25 | RRR: 9.17");
    }

    #[test]
    fn test_overs_keep_reported_precision() {
        assert_eq!(format_overs(Some(7.0)), "7.0");
        assert_eq!(format_overs(Some(15.2)), "15.2");
        assert_eq!(format_overs(Some(15.25)), "15.25");
        assert_eq!(format_overs(None), "-");
    }

    #[test]
    fn test_overs_summary() {
        let mut record = TestDataBuilder::live_chase();
        assert_eq!(format_overs_summary(&record), "India: 20.0 | Australia: 15.2");

        record.overs2 = None;
        assert_eq!(format_overs_summary(&record), "India: 20.0 | Australia: -");
    }

    #[test]
    fn test_status_falls_back_to_placeholder() {
        let mut record = TestDataBuilder::live_chase();
        assert_eq!(format_status(&record), "Live");

        record.status.clear();
        assert_eq!(format_status(&record), "Match in progress");
    }

    #[test]
    fn test_error_and_no_match_texts() {
        assert_eq!(format_error("No matches found"), "⚠️ No matches found");
        assert_eq!(no_matches_message(false), "No live matches");
        assert_eq!(no_matches_message(true), "No matches for your favorite teams");
    }
}
