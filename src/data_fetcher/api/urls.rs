//! URL building utilities for API endpoints

/// Appends the API key as an `apikey` query parameter.
///
/// Uses `&` when the URL already carries a query string, otherwise `?`.
/// A missing or blank key leaves the URL unchanged.
///
/// # Example
/// ```
/// use cricket_glyph::data_fetcher::api::build_primary_url;
///
/// let url = build_primary_url("https://api.example.com/live", Some("k1"));
/// assert_eq!(url, "https://api.example.com/live?apikey=k1");
///
/// let url = build_primary_url("https://api.example.com/live?offset=0", Some("k1"));
/// assert_eq!(url, "https://api.example.com/live?offset=0&apikey=k1");
/// ```
pub fn build_primary_url(base_url: &str, api_key: Option<&str>) -> String {
    match api_key.map(str::trim).filter(|key| !key.is_empty()) {
        Some(key) => {
            let separator = if base_url.contains('?') { '&' } else { '?' };
            format!("{base_url}{separator}apikey={key}")
        }
        None => base_url.to_string(),
    }
}

/// Strips the `apikey` value so URLs can be logged
pub fn redact_api_key(url: &str) -> String {
    match url.find("apikey=") {
        Some(start) => {
            let value_start = start + "apikey=".len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |offset| value_start + offset);
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_leaves_url_unchanged() {
        assert_eq!(
            build_primary_url("https://api.example.com/live", None),
            "https://api.example.com/live"
        );
        assert_eq!(
            build_primary_url("https://api.example.com/live", Some("  ")),
            "https://api.example.com/live"
        );
    }

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact_api_key("https://api.example.com/live?apikey=secret"),
            "https://api.example.com/live?apikey=***"
        );
        assert_eq!(
            redact_api_key("https://api.example.com/live?apikey=secret&offset=0"),
            "https://api.example.com/live?apikey=***&offset=0"
        );
        assert_eq!(
            redact_api_key("https://api.example.com/live"),
            "https://api.example.com/live"
        );
    }
}
