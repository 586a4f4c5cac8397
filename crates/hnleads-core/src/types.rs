use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminator for Hacker News items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Comment,
    Story,
}

impl ItemKind {
    /// The Algolia `tags` filter value for this kind.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            ItemKind::Comment => "comment",
            ItemKind::Story => "story",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One comment or story returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    /// Algolia `objectID`; also the HN item id.
    pub id: String,
    pub author: Option<String>,
    pub kind: ItemKind,
    /// Comment body, else story body, else story title.
    pub text: String,
    /// Unix seconds. `0` when the source omitted it.
    pub created_at_i: i64,
}

/// An author's public profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub about: Option<String>,
    pub karma: i64,
}

/// A qualifying author together with the signals extracted for them.
///
/// Field names serialize to the dataset keys downstream consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "hn_username")]
    pub author: String,
    #[serde(rename = "hn_karma")]
    pub karma: i64,
    /// Profile about text, at most 500 characters.
    #[serde(rename = "hn_about")]
    pub about: String,
    #[serde(rename = "hn_item_id")]
    pub item_id: String,
    #[serde(rename = "hn_url")]
    pub item_url: String,
    #[serde(rename = "item_type")]
    pub item_kind: ItemKind,
    /// Item text, at most 500 characters.
    pub item_text: String,
    pub created_at: DateTime<Utc>,

    pub is_founder: bool,
    /// In `[0, 100]`.
    #[serde(rename = "founder_confidence")]
    pub confidence: u8,

    pub website: Option<String>,
    pub company_name: Option<String>,
    pub pain_points: Vec<String>,

    pub search_query: String,
    pub scraped_at: DateTime<Utc>,
}
