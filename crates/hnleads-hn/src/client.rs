//! HTTP client for the Hacker News Algolia search API and Firebase user API.
//!
//! Every request goes through a [`RequestGate`] and is retried on transient
//! failures. Responses are normalized before they are returned, so callers
//! only ever see [`RawItem`] and [`UserProfile`].

use std::time::Duration;

use hnleads_core::{AppConfig, ItemKind, RawItem, UserProfile};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::HnError;
use crate::gate::RequestGate;
use crate::normalize::{hit_to_item, user_to_profile};
use crate::retry::retry_with_backoff;
use crate::types::{FirebaseUser, SearchResponse};

pub const DEFAULT_ALGOLIA_BASE_URL: &str = "https://hn.algolia.com/api/v1";
pub const DEFAULT_FIREBASE_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Connection settings for [`HnClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HnClientConfig {
    pub algolia_base_url: String,
    pub firebase_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    /// Minimum gap between any two requests; `0` disables pacing.
    pub inter_request_delay_ms: u64,
}

impl Default for HnClientConfig {
    fn default() -> Self {
        Self {
            algolia_base_url: DEFAULT_ALGOLIA_BASE_URL.to_string(),
            firebase_base_url: DEFAULT_FIREBASE_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: "hnleads/0.1 (lead-research)".to_string(),
            max_retries: 3,
            retry_backoff_base_ms: 1_000,
            inter_request_delay_ms: 500,
        }
    }
}

impl From<&AppConfig> for HnClientConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            algolia_base_url: config.algolia_base_url.clone(),
            firebase_base_url: config.firebase_base_url.clone(),
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            max_retries: config.max_retries,
            retry_backoff_base_ms: config.retry_backoff_base_ms,
            inter_request_delay_ms: config.inter_request_delay_ms,
        }
    }
}

/// Read-only Hacker News client.
///
/// Use [`HnClient::new`] for the configured endpoints or
/// [`HnClient::with_base_urls`] to point both APIs at a mock server.
#[derive(Debug)]
pub struct HnClient {
    client: Client,
    algolia_base_url: Url,
    firebase_base_url: Url,
    gate: RequestGate,
    max_retries: u32,
    retry_backoff_base_ms: u64,
}

impl HnClient {
    /// # Errors
    ///
    /// Returns [`HnError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`HnError::InvalidBaseUrl`] if either configured base URL is malformed.
    pub fn new(config: &HnClientConfig) -> Result<Self, HnError> {
        Self::with_base_urls(config, &config.algolia_base_url, &config.firebase_base_url)
    }

    /// Like [`HnClient::new`] but overrides both base URLs.
    ///
    /// # Errors
    ///
    /// Same as [`HnClient::new`].
    pub fn with_base_urls(
        config: &HnClientConfig,
        algolia_base_url: &str,
        firebase_base_url: &str,
    ) -> Result<Self, HnError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            algolia_base_url: parse_base_url(algolia_base_url)?,
            firebase_base_url: parse_base_url(firebase_base_url)?,
            gate: RequestGate::new(Duration::from_millis(config.inter_request_delay_ms)),
            max_retries: config.max_retries,
            retry_backoff_base_ms: config.retry_backoff_base_ms,
        })
    }

    /// Searches items of one kind created after `since` (Unix seconds).
    ///
    /// Returns at most `max_results` items in relevance order.
    ///
    /// # Errors
    ///
    /// - [`HnError::RateLimited`] or [`HnError::UnexpectedStatus`] once retries
    ///   are exhausted or for a non-retriable status.
    /// - [`HnError::Http`] on network failure after all retries.
    /// - [`HnError::Deserialize`] if the body is not a search response.
    pub async fn search_items(
        &self,
        query: &str,
        kind: ItemKind,
        max_results: u32,
        since: i64,
    ) -> Result<Vec<RawItem>, HnError> {
        let url = self.search_url(query, kind, max_results, since)?;
        let context = format!("search(query={query}, tags={kind})");
        let response: SearchResponse = self.get_json(&url, &context).await?;

        let limit = usize::try_from(max_results).unwrap_or(usize::MAX);
        Ok(response.hits.iter().take(limit).map(hit_to_item).collect())
    }

    /// Fetches a user's public profile. `Ok(None)` means the user does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`HnClient::search_items`].
    pub async fn fetch_user(&self, username: &str) -> Result<Option<UserProfile>, HnError> {
        let url = self.user_url(username)?;
        let context = format!("user({username})");
        let user: Option<FirebaseUser> = self.get_json(&url, &context).await?;
        Ok(user.as_ref().map(user_to_profile))
    }

    fn search_url(
        &self,
        query: &str,
        kind: ItemKind,
        max_results: u32,
        since: i64,
    ) -> Result<Url, HnError> {
        let mut url = join(&self.algolia_base_url, "search")?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("tags", kind.as_tag())
            .append_pair("numericFilters", &format!("created_at_i>{since}"))
            .append_pair("hitsPerPage", &max_results.to_string());
        Ok(url)
    }

    fn user_url(&self, username: &str) -> Result<Url, HnError> {
        join(&self.firebase_base_url, &format!("user/{username}.json"))
    }

    /// Gated, retried GET that decodes the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &Url, context: &str) -> Result<T, HnError> {
        retry_with_backoff(self.max_retries, self.retry_backoff_base_ms, || async move {
            self.gate.wait().await;
            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after_secs = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                return Err(HnError::RateLimited {
                    host: url.host_str().unwrap_or_default().to_string(),
                    retry_after_secs,
                });
            }

            if !status.is_success() {
                return Err(HnError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let body = response.text().await?;
            serde_json::from_str::<T>(&body).map_err(|e| HnError::Deserialize {
                context: context.to_string(),
                source: e,
            })
        })
        .await
    }
}

/// Parses a base URL and ensures it ends with exactly one slash, so that
/// relative joins append to the path instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, HnError> {
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| HnError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn join(base: &Url, path: &str) -> Result<Url, HnError> {
    base.join(path).map_err(|e| HnError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
