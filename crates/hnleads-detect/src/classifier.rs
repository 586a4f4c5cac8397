//! Founder classifier: about text plus item text → verdict and confidence.

use std::sync::LazyLock;

use crate::patterns::RuleSet;

/// Phrases that mark an author as a founder or owner.
static FOUNDER_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(&[
        ("founder", r"\bfounder\b"),
        ("ceo", r"\bceo\b"),
        ("co-founder", r"\bco-founder\b"),
        ("creator of", r"\bcreator of\b"),
        ("building", r"\bbuilding\b"),
        ("built", r"\bbuilt\b"),
        ("started", r"\bstarted\b"),
        ("owner", r"\bowner\b"),
        ("cto", r"\bcto\b"),
        ("entrepreneur", r"\bentrepreneur\b"),
    ])
});

/// Phrases in an about text that rule the author out entirely.
static EXCLUSION_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(&[
        ("looking for work", r"\blooking for work\b"),
        ("seeking employment", r"\bseeking employment\b"),
        ("seeking opportunities", r"\bseeking opportunities\b"),
        ("available for hire", r"\bavailable for hire\b"),
        ("open to offers", r"\bopen to offers\b"),
    ])
});

/// An about-text signal is worth 1.0, an item-text signal 0.5.
const ABOUT_HALF_POINTS: u32 = 2;
const ITEM_HALF_POINTS: u32 = 1;
/// `score >= 1.0`.
const FOUNDER_THRESHOLD_HALF_POINTS: u32 = 2;
/// `floor(score * 30)` expressed per half point.
const CONFIDENCE_PER_HALF_POINT: u32 = 15;
const MAX_CONFIDENCE: u8 = 100;

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FounderVerdict {
    pub is_founder: bool,
    /// In `[0, 100]`.
    pub confidence: u8,
    /// Accumulated evidence in half points (`score * 2`).
    pub half_points: u32,
}

impl FounderVerdict {
    const REJECTED: Self = Self {
        is_founder: false,
        confidence: 0,
        half_points: 0,
    };

    /// The real-valued score: 1.0 per about-text signal, 0.5 per item-text signal.
    #[must_use]
    pub fn score(&self) -> f64 {
        f64::from(self.half_points) / 2.0
    }
}

/// Decide whether an author looks like a founder.
///
/// Exclusion phrases in the about text win over any number of founder
/// signals. Each founder phrase is counted once per text, independently for
/// the about text and the item text.
#[must_use]
pub fn classify(about: Option<&str>, item_text: &str) -> FounderVerdict {
    let Some(about) = about.filter(|a| !a.is_empty()) else {
        return FounderVerdict::REJECTED;
    };

    if EXCLUSION_RULES.is_match_any(about) {
        return FounderVerdict::REJECTED;
    }

    let about_hits = u32::try_from(FOUNDER_RULES.matching(about).count()).unwrap_or(u32::MAX);
    let item_hits = u32::try_from(FOUNDER_RULES.matching(item_text).count()).unwrap_or(u32::MAX);
    let half_points = about_hits
        .saturating_mul(ABOUT_HALF_POINTS)
        .saturating_add(item_hits.saturating_mul(ITEM_HALF_POINTS));

    let confidence = half_points
        .saturating_mul(CONFIDENCE_PER_HALF_POINT)
        .min(u32::from(MAX_CONFIDENCE));

    FounderVerdict {
        is_founder: half_points >= FOUNDER_THRESHOLD_HALF_POINTS,
        confidence: u8::try_from(confidence).unwrap_or(MAX_CONFIDENCE),
        half_points,
    }
}
