//! Shared records and configuration for the hnleads workspace.
//!
//! The detection crate consumes [`RawItem`] and [`UserProfile`] and produces
//! [`Lead`]s; the retrieval crate produces the inputs; the CLI wires both
//! together using [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod queries;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, SearchScope};
pub use config::{load_app_config, load_app_config_from_env};
pub use queries::{load_queries, QueriesFile, DEFAULT_QUERIES};
pub use types::{ItemKind, Lead, RawItem, UserProfile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read queries file {path}: {source}")]
    QueriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse queries file: {0}")]
    QueriesFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
