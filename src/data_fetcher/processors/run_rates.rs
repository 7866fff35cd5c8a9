//! Derived match statistics

use crate::constants::match_rules::ASSUMED_INNINGS_OVERS;
use crate::data_fetcher::models::MatchRecord;

/// Runs per over for the side batting first.
///
/// Returns 0.0 unless both runs and a positive over count are known.
pub fn current_run_rate(runs: Option<u32>, overs: Option<f64>) -> f64 {
    match (runs, overs) {
        (Some(runs), Some(overs)) if overs > 0.0 => f64::from(runs) / overs,
        _ => 0.0,
    }
}

/// Run rate the chasing side needs to pass the first innings total.
///
/// Always assumes a 20 over innings, whatever the match type. Overs are used
/// as reported (15.2 is treated as 15.2, not 15 and two balls). Returns 0.0
/// when any input is missing or no overs remain.
pub fn required_run_rate(record: &MatchRecord) -> f64 {
    let (Some(runs1), Some(runs2), Some(_), Some(overs2)) =
        (record.runs1, record.runs2, record.overs1, record.overs2)
    else {
        return 0.0;
    };

    let remaining_overs = ASSUMED_INNINGS_OVERS - overs2;
    if remaining_overs <= 0.0 {
        return 0.0;
    }

    let required_runs = i64::from(runs1) - i64::from(runs2) + 1;
    required_runs as f64 / remaining_overs
}

/// Fills in both run rates on a freshly built record
pub fn calculate_run_rates(record: &mut MatchRecord) {
    record.current_run_rate = current_run_rate(record.runs1, record.overs1);
    record.required_run_rate = required_run_rate(record);
}

/// A status of "live" or "in progress" (any case) marks the match as live
pub fn is_live_status(status: &str) -> bool {
    status.eq_ignore_ascii_case("live") || status.eq_ignore_ascii_case("in progress")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chase(runs1: u32, overs1: f64, runs2: u32, overs2: f64) -> MatchRecord {
        MatchRecord {
            runs1: Some(runs1),
            overs1: Some(overs1),
            runs2: Some(runs2),
            overs2: Some(overs2),
            ..Default::default()
        }
    }

    #[test]
    fn test_current_run_rate_exact() {
        assert_eq!(current_run_rate(Some(185), Some(20.0)), 9.25);
    }

    #[test]
    fn test_current_run_rate_zero_overs() {
        assert_eq!(current_run_rate(Some(12), Some(0.0)), 0.0);
        assert_eq!(current_run_rate(None, Some(4.0)), 0.0);
        assert_eq!(current_run_rate(Some(12), None), 0.0);
    }

    #[test]
    fn test_required_run_rate_mid_chase() {
        let record = chase(185, 20.0, 142, 15.2);
        let rate = required_run_rate(&record);
        assert!((rate - 44.0 / 4.8).abs() < 1e-9);
        assert_eq!(format!("{rate:.2}"), "9.17");
    }

    #[test]
    fn test_required_run_rate_no_overs_left() {
        assert_eq!(required_run_rate(&chase(150, 20.0, 120, 20.0)), 0.0);
        assert_eq!(required_run_rate(&chase(298, 50.0, 165, 32.3)), 0.0);
    }

    #[test]
    fn test_required_run_rate_can_be_negative_once_target_passed() {
        let rate = required_run_rate(&chase(100, 20.0, 110, 18.0));
        assert!((rate - (-9.0 / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_required_run_rate_needs_both_innings() {
        let mut record = chase(185, 20.0, 142, 15.2);
        record.runs2 = None;
        assert_eq!(required_run_rate(&record), 0.0);

        let mut record = chase(185, 20.0, 142, 15.2);
        record.overs1 = None;
        assert_eq!(required_run_rate(&record), 0.0);
    }

    #[test]
    fn test_is_live_status() {
        assert!(is_live_status("Live"));
        assert!(is_live_status("IN PROGRESS"));
        assert!(!is_live_status("Match ended"));
        assert!(!is_live_status(" live"));
        assert!(!is_live_status(""));
    }
}
