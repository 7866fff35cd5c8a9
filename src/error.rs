use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Payload errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    /// Both the primary and the fallback source came back empty
    #[error("No matches found")]
    NoMatchesFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a render error with context
    pub fn render_error(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Maps a non-success HTTP status to the matching error variant
    pub fn from_status(status_code: u16, reason: &str, url: &str) -> Self {
        match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        }
    }

    /// Transport or HTTP status failure; recovered by the fallback source
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::ApiServiceUnavailable { .. }
        )
    }

    /// The normal "nothing to show" outcome of a fetch
    pub fn is_no_matches(&self) -> bool {
        matches!(self, AppError::NoMatchesFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_no_matches_display_text() {
        let error = AppError::NoMatchesFound;
        assert_eq!(error.to_string(), "No matches found");
        assert!(error.is_no_matches());
        assert!(!error.is_network_error());
    }

    #[test]
    fn test_from_status_mapping() {
        let url = "https://api.example.com/live";
        assert!(matches!(
            AppError::from_status(404, "Not Found", url),
            AppError::ApiNotFound { .. }
        ));
        assert!(matches!(
            AppError::from_status(429, "Too Many Requests", url),
            AppError::ApiRateLimit { .. }
        ));
        assert!(matches!(
            AppError::from_status(401, "Unauthorized", url),
            AppError::ApiClientError { status: 401, .. }
        ));
        assert!(matches!(
            AppError::from_status(503, "Service Unavailable", url),
            AppError::ApiServiceUnavailable { status: 503, .. }
        ));
        assert!(matches!(
            AppError::from_status(500, "Internal Server Error", url),
            AppError::ApiServerError { status: 500, .. }
        ));
    }

    #[test]
    fn test_network_errors_are_classified() {
        let url = "https://api.example.com/live";
        assert!(AppError::network_timeout(url).is_network_error());
        assert!(AppError::network_connection(url, "refused").is_network_error());
        assert!(AppError::api_server_error(500, "boom", url).is_network_error());
        assert!(!AppError::api_no_data("empty", url).is_network_error());
        assert!(!AppError::config_error("bad").is_network_error());
    }

    #[test]
    fn test_network_timeout_display() {
        let error = AppError::network_timeout("https://api.example.com/live");
        assert_eq!(
            error.to_string(),
            "Network timeout while fetching data from: https://api.example.com/live"
        );
    }
}
