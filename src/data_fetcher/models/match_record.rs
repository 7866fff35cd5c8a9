/// A normalized live match.
///
/// Score fields are `None` when the provider did not send them, which is
/// different from a score of zero. Records are rebuilt from scratch on every
/// fetch and replaced wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchRecord {
    pub id: String,
    pub name: String,
    /// Competition kind such as T20, ODI or Test
    pub match_type: String,
    pub venue: String,

    pub team1: Option<String>,
    pub team2: Option<String>,

    pub runs1: Option<u32>,
    pub wickets1: Option<u32>,
    pub overs1: Option<f64>,
    pub runs2: Option<u32>,
    pub wickets2: Option<u32>,
    pub overs2: Option<f64>,

    pub status: String,
    pub is_live: bool,

    pub current_run_rate: f64,
    pub required_run_rate: f64,
}

impl MatchRecord {
    /// True when both teams are known and the first innings has runs and overs
    pub fn is_complete(&self) -> bool {
        self.team1.is_some() && self.team2.is_some() && self.runs1.is_some() && self.overs1.is_some()
    }

    /// Short display name, e.g. "IND vs AUS"
    pub fn short_name(&self) -> String {
        match (&self.team1, &self.team2) {
            (Some(team1), Some(team2)) => format!(
                "{} vs {}",
                get_team_abbreviation(team1),
                get_team_abbreviation(team2)
            ),
            _ if !self.name.is_empty() => self.name.clone(),
            _ => "Unknown Match".to_string(),
        }
    }

    /// True if either side's name contains `needle_lowercase`
    pub fn involves_team(&self, needle_lowercase: &str) -> bool {
        [&self.team1, &self.team2]
            .into_iter()
            .flatten()
            .any(|team| team.to_lowercase().contains(needle_lowercase))
    }
}

/// Returns the common abbreviation for a national side, otherwise the first
/// three letters uppercased.
///
/// # Example
/// ```
/// use cricket_glyph::data_fetcher::models::get_team_abbreviation;
///
/// assert_eq!(get_team_abbreviation("South Africa"), "RSA");
/// assert_eq!(get_team_abbreviation("Kent"), "KEN");
/// ```
pub fn get_team_abbreviation(team_name: &str) -> String {
    if team_name.is_empty() {
        return "???".to_string();
    }

    match team_name.to_lowercase().as_str() {
        "india" => "IND",
        "australia" => "AUS",
        "england" => "ENG",
        "pakistan" => "PAK",
        "south africa" => "RSA",
        "new zealand" => "NZ",
        "sri lanka" => "SL",
        "west indies" => "WI",
        "bangladesh" => "BAN",
        "afghanistan" => "AFG",
        "zimbabwe" => "ZIM",
        "ireland" => "IRE",
        _ => return team_name.chars().take(3).collect::<String>().to_uppercase(),
    }
    .to_string()
}
