use std::sync::LazyLock;

use crate::patterns::RuleSet;

pub const MAX_PAIN_POINTS: usize = 3;

/// Longest captured problem (exclusive) that is still reported.
const MAX_PROBLEM_CHARS: usize = 100;

/// Rule names double as the label prefixed to each reported phrase.
static PAIN_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(&[
        ("struggling with", r"struggling with ([^.!?]+)"),
        ("challenge with", r"challenge (?:with|of) ([^.!?]+)"),
        ("problem with", r"problem (?:with|is) ([^.!?]+)"),
        ("difficult to", r"difficult to ([^.!?]+)"),
        ("hard to", r"hard to ([^.!?]+)"),
        ("need help with", r"need (?:help|advice) (?:with|on) ([^.!?]+)"),
    ])
});

/// Up to [`MAX_PAIN_POINTS`] labelled problem statements found in `text`.
///
/// Results follow rule order, then position within the text. The author's
/// casing of the captured problem is kept.
#[must_use]
pub fn extract_pain_points(text: &str) -> Vec<String> {
    PAIN_RULES
        .captures(text)
        .into_iter()
        .filter_map(|capture| {
            let problem = capture.text.trim();
            (problem.chars().count() < MAX_PROBLEM_CHARS)
                .then(|| format!("{} {problem}", capture.rule))
        })
        .take(MAX_PAIN_POINTS)
        .collect()
}
