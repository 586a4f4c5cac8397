//! Conversion of raw API shapes into [`RawItem`] and [`UserProfile`].
//!
//! HN serves comment, story and about text as HTML. Everything that leaves
//! this module is plain text: tags stripped, entities decoded, whitespace
//! collapsed.

use chrono::{DateTime, Utc};
use hnleads_core::{ItemKind, RawItem, UserProfile};

use crate::types::{FirebaseUser, SearchHit};

const SECONDS_PER_DAY: i64 = 86_400;

/// Tags that separate words when rendered.
const BLOCK_TAGS: &[&str] = &[
    "p",
    "br",
    "div",
    "pre",
    "code",
    "li",
    "ul",
    "ol",
    "blockquote",
];

/// Converts HN HTML into plain text.
///
/// Tags are removed before entities are decoded, so an escaped `&lt;b&gt;`
/// survives as the literal text `<b>`.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' if !in_tag => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                if is_block_tag(&tag) {
                    out.push(' ');
                }
            }
            _ if in_tag => tag.push(ch),
            _ => out.push(ch),
        }
    }
    let decoded = html_escape::decode_html_entities(&out);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_block_tag(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default();
    BLOCK_TAGS.iter().any(|b| b.eq_ignore_ascii_case(name))
}

/// Maps a search hit to a [`RawItem`].
///
/// A hit carrying `comment_text` is a comment; anything else is a story. Text
/// is the first non-empty of comment body, story body, title.
#[must_use]
pub fn hit_to_item(hit: &SearchHit) -> RawItem {
    let kind = if hit.comment_text.is_some() {
        ItemKind::Comment
    } else {
        ItemKind::Story
    };
    let text = [&hit.comment_text, &hit.story_text, &hit.title]
        .into_iter()
        .flatten()
        .find(|t| !t.trim().is_empty())
        .map(|t| html_to_text(t))
        .unwrap_or_default();

    RawItem {
        id: hit.object_id.clone(),
        author: hit.author.clone().filter(|a| !a.is_empty()),
        kind,
        text,
        created_at_i: hit.created_at_i.unwrap_or(0),
    }
}

/// Maps a Firebase user to a [`UserProfile`]. A blank about becomes `None`.
#[must_use]
pub fn user_to_profile(user: &FirebaseUser) -> UserProfile {
    UserProfile {
        username: user.id.clone(),
        about: user
            .about
            .as_deref()
            .map(html_to_text)
            .filter(|a| !a.is_empty()),
        karma: user.karma,
    }
}

/// Unix timestamp `days` days before `now`; the lower bound for search results.
#[must_use]
pub fn cutoff_timestamp(now: DateTime<Utc>, days: u32) -> i64 {
    now.timestamp() - i64::from(days) * SECONDS_PER_DAY
}
