use crate::error::AppError;
use std::path::Path;

fn validate_url(label: &str, url: &str) -> Result<(), AppError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{label} must start with http:// or https:// (got '{url}')"
        )));
    }
    if url.trim_start_matches("https://").trim_start_matches("http://").is_empty() {
        return Err(AppError::config_error(format!("{label} has no host")));
    }
    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Endpoint overrides, when set, must be http(s) URLs with a host
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    custom_api_url: Option<&str>,
    fallback_api_url: Option<&str>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if let Some(url) = custom_api_url {
        validate_url("Custom API URL", url)?;
    }
    if let Some(url) = fallback_api_url {
        validate_url("Fallback API URL", url)?;
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
