//! Turns one search item plus its author's profile into a [`Lead`].

use chrono::{DateTime, Utc};
use hnleads_core::{Lead, RawItem, UserProfile};
use thiserror::Error;

use crate::classifier::classify;
use crate::extract::{extract_company_name, extract_pain_points, extract_website};

/// Longest about/item text carried on a lead, in characters.
pub const MAX_TEXT_CHARS: usize = 500;

const ITEM_URL_BASE: &str = "https://news.ycombinator.com/item?id=";

/// Why an item produced no lead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("item {item_id} has no author")]
    MissingAuthor { item_id: String },

    #[error("no profile available for {author}")]
    MissingProfile { author: String },

    #[error("{author} does not look like a founder (confidence {confidence})")]
    NotFounder { author: String, confidence: u8 },
}

/// Classify the author of `item` and build a lead if they qualify.
///
/// The website comes from the profile's about text; company name and pain
/// points come from the item text.
///
/// # Errors
///
/// Returns a [`Rejection`] when the item has no author, the profile is
/// missing, or the classifier does not flag the author as a founder.
pub fn assemble_lead(
    item: &RawItem,
    profile: Option<&UserProfile>,
    search_query: &str,
    scraped_at: DateTime<Utc>,
) -> Result<Lead, Rejection> {
    let author = item
        .author
        .as_deref()
        .filter(|a| !a.is_empty())
        .ok_or_else(|| Rejection::MissingAuthor {
            item_id: item.id.clone(),
        })?;

    let profile = profile.ok_or_else(|| Rejection::MissingProfile {
        author: author.to_string(),
    })?;

    let about = profile.about.as_deref().unwrap_or_default();
    let verdict = classify(Some(about), &item.text);
    if !verdict.is_founder {
        return Err(Rejection::NotFounder {
            author: author.to_string(),
            confidence: verdict.confidence,
        });
    }

    Ok(Lead {
        author: author.to_string(),
        karma: profile.karma,
        about: truncate_chars(about, MAX_TEXT_CHARS),
        item_id: item.id.clone(),
        item_url: format!("{ITEM_URL_BASE}{}", item.id),
        item_kind: item.kind,
        item_text: truncate_chars(&item.text, MAX_TEXT_CHARS),
        created_at: DateTime::from_timestamp(item.created_at_i, 0).unwrap_or_default(),
        is_founder: true,
        confidence: verdict.confidence,
        website: extract_website(about),
        company_name: extract_company_name(&item.text),
        pain_points: extract_pain_points(&item.text),
        search_query: search_query.to_string(),
        scraped_at,
    })
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
