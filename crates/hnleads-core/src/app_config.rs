use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::ItemKind;

/// Which item kinds a scan searches for every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    Comments,
    Stories,
    Both,
}

impl SearchScope {
    /// Item kinds covered by this scope, comments first.
    #[must_use]
    pub fn kinds(self) -> &'static [ItemKind] {
        match self {
            SearchScope::Comments => &[ItemKind::Comment],
            SearchScope::Stories => &[ItemKind::Story],
            SearchScope::Both => &[ItemKind::Comment, ItemKind::Story],
        }
    }
}

impl std::fmt::Display for SearchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchScope::Comments => write!(f, "comments"),
            SearchScope::Stories => write!(f, "stories"),
            SearchScope::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comments" => Ok(SearchScope::Comments),
            "stories" => Ok(SearchScope::Stories),
            "both" => Ok(SearchScope::Both),
            other => Err(format!(
                "unknown search scope '{other}'; expected comments, stories, or both"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub queries_path: Option<PathBuf>,
    pub search_scope: SearchScope,
    pub max_results_per_query: u32,
    pub days_back: u32,
    pub output_path: PathBuf,
    pub algolia_base_url: String,
    pub firebase_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_items: usize,
    pub inter_request_delay_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}
