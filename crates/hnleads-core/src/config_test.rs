use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.queries_path.is_none());
    assert_eq!(cfg.search_scope, SearchScope::Both);
    assert_eq!(cfg.max_results_per_query, 50);
    assert_eq!(cfg.days_back, 30);
    assert_eq!(cfg.output_path, PathBuf::from("./leads.json"));
    assert_eq!(cfg.algolia_base_url, "https://hn.algolia.com/api/v1");
    assert_eq!(cfg.firebase_base_url, "https://hacker-news.firebaseio.com/v0");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "hnleads/0.1 (lead-research)");
    assert_eq!(cfg.max_concurrent_items, 1);
    assert_eq!(cfg.inter_request_delay_ms, 500);
    assert_eq!(cfg.max_retries, 3);
    assert_eq!(cfg.retry_backoff_base_ms, 1000);
}

#[test]
fn search_scope_override() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_SEARCH_SCOPE", "Stories");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search_scope, SearchScope::Stories);
}

#[test]
fn search_scope_invalid() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_SEARCH_SCOPE", "polls");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HNLEADS_SEARCH_SCOPE"),
        "expected InvalidEnvVar(HNLEADS_SEARCH_SCOPE), got: {result:?}"
    );
}

#[test]
fn queries_path_is_read_when_set() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_QUERIES_PATH", "./config/queries.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.queries_path,
        Some(PathBuf::from("./config/queries.yaml"))
    );
}

#[test]
fn blank_queries_path_is_ignored() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_QUERIES_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.queries_path.is_none());
}

#[test]
fn max_results_per_query_override() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_MAX_RESULTS_PER_QUERY", "100");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_results_per_query, 100);
}

#[test]
fn max_results_per_query_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_MAX_RESULTS_PER_QUERY", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HNLEADS_MAX_RESULTS_PER_QUERY"),
        "expected InvalidEnvVar(HNLEADS_MAX_RESULTS_PER_QUERY), got: {result:?}"
    );
}

#[test]
fn days_back_invalid() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_DAYS_BACK", "a month");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HNLEADS_DAYS_BACK"),
        "expected InvalidEnvVar(HNLEADS_DAYS_BACK), got: {result:?}"
    );
}

#[test]
fn max_concurrent_items_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_MAX_CONCURRENT_ITEMS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HNLEADS_MAX_CONCURRENT_ITEMS"),
        "expected InvalidEnvVar(HNLEADS_MAX_CONCURRENT_ITEMS), got: {result:?}"
    );
}

#[test]
fn inter_request_delay_ms_override() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_INTER_REQUEST_DELAY_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.inter_request_delay_ms, 0);
}

#[test]
fn max_retries_invalid() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HNLEADS_MAX_RETRIES"),
        "expected InvalidEnvVar(HNLEADS_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn base_url_overrides() {
    let mut map = HashMap::new();
    map.insert("HNLEADS_ALGOLIA_BASE_URL", "http://127.0.0.1:9000");
    map.insert("HNLEADS_FIREBASE_BASE_URL", "http://127.0.0.1:9001/v0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.algolia_base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.firebase_base_url, "http://127.0.0.1:9001/v0");
}

#[test]
fn search_scope_kinds_list_comments_first() {
    use crate::types::ItemKind;

    assert_eq!(
        SearchScope::Both.kinds(),
        &[ItemKind::Comment, ItemKind::Story]
    );
    assert_eq!(SearchScope::Comments.kinds(), &[ItemKind::Comment]);
    assert_eq!(SearchScope::Stories.kinds(), &[ItemKind::Story]);
}
