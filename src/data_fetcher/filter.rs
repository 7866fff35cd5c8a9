//! Favorite team filtering

use crate::data_fetcher::models::MatchRecord;
use tracing::debug;

/// Keeps the matches in which either side's name contains any favorite team
/// name, ignoring case. An empty favorites list keeps everything. Input order
/// is preserved.
///
/// # Example
/// ```
/// use cricket_glyph::data_fetcher::filter::filter_matches;
/// use cricket_glyph::data_fetcher::models::MatchRecord;
///
/// let game = |a: &str, b: &str| MatchRecord {
///     team1: Some(a.to_string()),
///     team2: Some(b.to_string()),
///     ..Default::default()
/// };
/// let matches = vec![game("India", "Australia"), game("England", "Pakistan")];
///
/// let filtered = filter_matches(matches.clone(), ["india"]);
/// assert_eq!(filtered, vec![game("India", "Australia")]);
///
/// let unfiltered = filter_matches(matches.clone(), Vec::<String>::new());
/// assert_eq!(unfiltered, matches);
/// ```
pub fn filter_matches<I, S>(matches: Vec<MatchRecord>, favorite_teams: I) -> Vec<MatchRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let favorites: Vec<String> = favorite_teams
        .into_iter()
        .map(|team| team.as_ref().trim().to_lowercase())
        .filter(|team| !team.is_empty())
        .collect();

    if favorites.is_empty() {
        return matches;
    }

    let total = matches.len();
    let filtered: Vec<MatchRecord> = matches
        .into_iter()
        .filter(|record| is_favorite_team_playing(record, &favorites))
        .collect();

    debug!(
        "Favorite filter kept {} of {} matches ({:?})",
        filtered.len(),
        total,
        favorites
    );
    filtered
}

fn is_favorite_team_playing(record: &MatchRecord, favorites_lowercase: &[String]) -> bool {
    favorites_lowercase
        .iter()
        .any(|favorite| record.involves_team(favorite))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use std::collections::BTreeSet;

    fn sample() -> Vec<MatchRecord> {
        vec![
            TestDataBuilder::create_match("India", "Australia"),
            TestDataBuilder::create_match("England", "Pakistan"),
            TestDataBuilder::create_match("India A", "England Lions"),
        ]
    }

    #[test]
    fn test_empty_favorites_pass_through() {
        let matches = sample();
        assert_eq!(filter_matches(matches.clone(), BTreeSet::<String>::new()), matches);
    }

    #[test]
    fn test_substring_case_insensitive() {
        let filtered = filter_matches(sample(), ["INDIA"]);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].team2.as_deref(), Some("Australia"));
        assert_eq!(filtered[1].team1.as_deref(), Some("India A"));
    }

    #[test]
    fn test_either_side_matches_and_order_kept() {
        let favorites: BTreeSet<String> = ["Pakistan", "Lions"].iter().map(|s| s.to_string()).collect();
        let filtered = filter_matches(sample(), &favorites);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].team1.as_deref(), Some("England"));
        assert_eq!(filtered[1].team1.as_deref(), Some("India A"));
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_matches(sample(), ["Nepal"]).is_empty());
    }

    #[test]
    fn test_blank_favorites_are_ignored() {
        let matches = sample();
        assert_eq!(filter_matches(matches.clone(), ["  "]), matches);
    }

    #[test]
    fn test_records_without_teams_never_match() {
        let matches = vec![MatchRecord::default()];
        assert!(filter_matches(matches, ["India"]).is_empty());
    }
}
