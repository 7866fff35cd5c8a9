use std::sync::{Arc, Mutex};

use crate::data_fetcher::models::MatchRecord;
use crate::data_fetcher::processors::calculate_run_rates;
use crate::display::{Frame, FrameRenderer};
use crate::error::AppError;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a match with teams only, no scores reported yet
    pub fn create_match(team1: &str, team2: &str) -> MatchRecord {
        MatchRecord {
            id: format!("{}-{}", team1.to_lowercase(), team2.to_lowercase()),
            name: format!("{team1} vs {team2}"),
            match_type: "t20".to_string(),
            venue: "Test Ground".to_string(),
            team1: Some(team1.to_string()),
            team2: Some(team2.to_string()),
            status: "Scheduled".to_string(),
            ..MatchRecord::default()
        }
    }

    /// Creates a live match with both innings and derived run rates
    pub fn create_live_match(
        team1: &str,
        team2: &str,
        first_innings: (u32, u32, f64),
        second_innings: (u32, u32, f64),
    ) -> MatchRecord {
        let (runs1, wickets1, overs1) = first_innings;
        let (runs2, wickets2, overs2) = second_innings;
        let mut record = MatchRecord {
            runs1: Some(runs1),
            wickets1: Some(wickets1),
            overs1: Some(overs1),
            runs2: Some(runs2),
            wickets2: Some(wickets2),
            overs2: Some(overs2),
            status: "Live".to_string(),
            is_live: true,
            ..Self::create_match(team1, team2)
        };
        calculate_run_rates(&mut record);
        record
    }

    /// India 185/5 (20.0) chased by Australia 142/3 (15.2)
    pub fn live_chase() -> MatchRecord {
        Self::create_live_match("India", "Australia", (185, 5, 20.0), (142, 3, 15.2))
    }

    /// Creates `count` distinct matches
    pub fn create_multiple_matches(count: usize) -> Vec<MatchRecord> {
        (0..count)
            .map(|i| Self::create_match(&format!("Team {}", i * 2), &format!("Team {}", i * 2 + 1)))
            .collect()
    }

    /// Provider payload for [`live_chase`](Self::live_chase)
    pub fn live_chase_payload() -> serde_json::Value {
        serde_json::json!({
            "data": [{
                "id": "india-australia",
                "name": "India vs Australia",
                "matchType": "t20",
                "status": "Live",
                "venue": "Test Ground",
                "teams": ["India", "Australia"],
                "score": { "team": [
                    { "runs": 185, "wickets": 5, "overs": 20.0 },
                    { "runs": 142, "wickets": 3, "overs": 15.2 }
                ]}
            }]
        })
    }
}

/// Property-based testing utilities
pub struct PropertyTesting;

impl PropertyTesting {
    /// Validates that a normalized record is internally consistent
    pub fn validate_match_record(record: &MatchRecord) -> Result<(), String> {
        if record.team1.as_deref().is_some_and(str::is_empty)
            || record.team2.as_deref().is_some_and(str::is_empty)
        {
            return Err("Team names cannot be empty strings".to_string());
        }

        for wickets in [record.wickets1, record.wickets2].into_iter().flatten() {
            if wickets > 10 {
                return Err(format!("{wickets} wickets is more than an innings allows"));
            }
        }

        for overs in [record.overs1, record.overs2].into_iter().flatten() {
            if !overs.is_finite() || overs < 0.0 {
                return Err(format!("Overs value {overs} is invalid"));
            }
        }

        if !record.current_run_rate.is_finite() || record.current_run_rate < 0.0 {
            return Err("Current run rate must be a non-negative number".to_string());
        }
        if !record.required_run_rate.is_finite() {
            return Err("Required run rate must be finite".to_string());
        }

        Ok(())
    }
}

/// Renderer that keeps every frame for later inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Arc<Mutex<Vec<Frame>>>,
    turned_off: Arc<Mutex<bool>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.frames
            .lock()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.lock().map(|frames| frames.len()).unwrap_or(0)
    }

    pub fn is_turned_off(&self) -> bool {
        self.turned_off.lock().map(|off| *off).unwrap_or(false)
    }
}

impl FrameRenderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), AppError> {
        self.frames
            .lock()
            .map_err(|_| AppError::render_error("frame log poisoned"))?
            .push(frame.clone());
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), AppError> {
        *self
            .turned_off
            .lock()
            .map_err(|_| AppError::render_error("frame log poisoned"))? = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::GlyphObject;

    #[test]
    fn test_create_match() {
        let record = TestDataBuilder::create_match("India", "Australia");
        assert_eq!(record.team1.as_deref(), Some("India"));
        assert_eq!(record.team2.as_deref(), Some("Australia"));
        assert_eq!(record.runs1, None);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_live_chase_has_derived_rates() {
        let record = TestDataBuilder::live_chase();
        assert!(record.is_complete());
        assert!(record.is_live);
        assert_eq!(record.current_run_rate, 9.25);
        assert!((record.required_run_rate - 44.0 / 4.8).abs() < 1e-9);
    }

    #[test]
    fn test_create_multiple_matches() {
        let matches = TestDataBuilder::create_multiple_matches(3);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[2].team1.as_deref(), Some("Team 4"));
    }

    #[test]
    fn test_property_validation() {
        assert!(PropertyTesting::validate_match_record(&TestDataBuilder::live_chase()).is_ok());

        let mut record = TestDataBuilder::live_chase();
        record.wickets2 = Some(11);
        assert!(PropertyTesting::validate_match_record(&record).is_err());

        let mut record = TestDataBuilder::live_chase();
        record.overs1 = Some(f64::NAN);
        assert!(PropertyTesting::validate_match_record(&record).is_err());
    }

    #[test]
    fn test_recording_renderer_shares_frames_between_clones() {
        let recorder = RecordingRenderer::new();
        let mut handle = recorder.clone();
        handle
            .render(&Frame::builder().add_top(GlyphObject::text("x")).build())
            .unwrap();
        handle.turn_off().unwrap();

        assert_eq!(recorder.frame_count(), 1);
        assert!(recorder.is_turned_off());
    }
}
