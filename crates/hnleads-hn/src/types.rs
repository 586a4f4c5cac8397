//! Raw response shapes from the Algolia search API and the Firebase user API.
//!
//! These mirror the JSON exactly; [`crate::normalize`] turns them into the
//! shared records in `hnleads-core`.

use serde::Deserialize;

/// Top-level body of `GET /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// One search hit. Every field except the id may be absent or `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub author: Option<String>,
    pub comment_text: Option<String>,
    pub story_text: Option<String>,
    pub title: Option<String>,
    pub created_at_i: Option<i64>,
}

/// Body of `GET /user/{name}.json` when the user exists.
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseUser {
    pub id: String,
    pub about: Option<String>,
    #[serde(default)]
    pub karma: i64,
}
