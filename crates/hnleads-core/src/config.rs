use std::path::PathBuf;

use crate::app_config::{AppConfig, SearchScope};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("HNLEADS_LOG_LEVEL", "info");
    let queries_path = lookup("HNLEADS_QUERIES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let search_scope = or_default("HNLEADS_SEARCH_SCOPE", "both")
        .parse::<SearchScope>()
        .map_err(|reason| invalid("HNLEADS_SEARCH_SCOPE", reason))?;

    let max_results_per_query = parse_u32("HNLEADS_MAX_RESULTS_PER_QUERY", "50")?;
    if max_results_per_query == 0 {
        return Err(invalid(
            "HNLEADS_MAX_RESULTS_PER_QUERY",
            "must be at least 1".to_string(),
        ));
    }
    let days_back = parse_u32("HNLEADS_DAYS_BACK", "30")?;
    let output_path = PathBuf::from(or_default("HNLEADS_OUTPUT_PATH", "./leads.json"));

    let algolia_base_url = or_default("HNLEADS_ALGOLIA_BASE_URL", "https://hn.algolia.com/api/v1");
    let firebase_base_url = or_default(
        "HNLEADS_FIREBASE_BASE_URL",
        "https://hacker-news.firebaseio.com/v0",
    );

    let request_timeout_secs = parse_u64("HNLEADS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("HNLEADS_USER_AGENT", "hnleads/0.1 (lead-research)");
    let max_concurrent_items = parse_usize("HNLEADS_MAX_CONCURRENT_ITEMS", "1")?;
    if max_concurrent_items == 0 {
        return Err(invalid(
            "HNLEADS_MAX_CONCURRENT_ITEMS",
            "must be at least 1".to_string(),
        ));
    }
    let inter_request_delay_ms = parse_u64("HNLEADS_INTER_REQUEST_DELAY_MS", "500")?;
    let max_retries = parse_u32("HNLEADS_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("HNLEADS_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        log_level,
        queries_path,
        search_scope,
        max_results_per_query,
        days_back,
        output_path,
        algolia_base_url,
        firebase_base_url,
        request_timeout_secs,
        user_agent,
        max_concurrent_items,
        inter_request_delay_ms,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
