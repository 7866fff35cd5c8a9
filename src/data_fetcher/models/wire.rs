//! Serde shapes of the live-scores API payload.
//!
//! Everything is optional. Records are deserialized one at a time from the
//! `data` array so that a single malformed entry can be skipped.

use serde::Deserialize;
use serde_json::Value;

/// Top level `{ "data": [ ... ] }` envelope
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LiveMatchesResponse {
    #[serde(default)]
    pub data: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiMatch {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "matchType", default, deserialize_with = "lenient_string")]
    pub match_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub venue: String,
    #[serde(default)]
    pub teams: Option<Vec<String>>,
    #[serde(default)]
    pub score: Option<ApiScore>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiScore {
    #[serde(default)]
    pub team: Option<Vec<ApiTeamScore>>,
}

/// One innings line. Values arrive as numbers or numeric strings depending on
/// the provider, so they are kept raw until normalization.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiTeamScore {
    #[serde(default)]
    pub runs: Option<Value>,
    #[serde(default)]
    pub wickets: Option<Value>,
    #[serde(default)]
    pub overs: Option<Value>,
}

/// Accepts strings, numbers and booleans; `null` becomes an empty string
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected a string, found {other}"
            )));
        }
    })
}
