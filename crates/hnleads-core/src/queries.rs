use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Search queries used when no queries file or CLI override is given.
pub const DEFAULT_QUERIES: &[&str] = &[
    "lead generation",
    "marketing automation",
    "sales process",
    "customer acquisition",
    "built a tool for",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueriesFile {
    pub queries: Vec<String>,
}

impl QueriesFile {
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            queries: DEFAULT_QUERIES.iter().map(|q| (*q).to_string()).collect(),
        }
    }
}

/// Load and validate search queries from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_queries(path: &Path) -> Result<QueriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::QueriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut queries_file: QueriesFile = serde_yaml::from_str(&content)?;
    for query in &mut queries_file.queries {
        *query = query.trim().to_string();
    }

    validate_queries(&queries_file.queries)?;

    Ok(queries_file)
}

/// Reject empty lists, blank entries and case-insensitive duplicates.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] describing the first offending entry.
pub fn validate_queries(queries: &[String]) -> Result<(), ConfigError> {
    if queries.is_empty() {
        return Err(ConfigError::Validation(
            "at least one search query is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for query in queries {
        if query.trim().is_empty() {
            return Err(ConfigError::Validation(
                "search queries must be non-empty".to_string(),
            ));
        }
        if !seen.insert(query.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate search query: '{query}'"
            )));
        }
    }

    Ok(())
}
