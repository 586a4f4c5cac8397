use std::sync::LazyLock;

use crate::patterns::RuleSet;

/// Lead-in phrase followed by a run of capitalized words, tried in order.
static COMPANY_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    const NAME_RUN: &str = r"((?-i:[A-Z][a-zA-Z]*(?:[ \t]+[A-Z][a-zA-Z]*)*))";
    RuleSet::new(&[
        ("founder of", &format!(r"\bfounder of {NAME_RUN}")),
        ("creator of", &format!(r"\bcreator of {NAME_RUN}")),
        ("building", &format!(r"\bbuilding {NAME_RUN}")),
        ("built", &format!(r"\bbuilt {NAME_RUN}")),
        ("working on", &format!(r"\bworking on {NAME_RUN}")),
        ("started", &format!(r"\bstarted {NAME_RUN}")),
    ])
});

/// Longest raw run considered, in characters.
const MAX_RUN_CHARS: usize = 31;
const MIN_NAME_CHARS: usize = 3;
const MAX_NAME_CHARS: usize = 50;

/// Company or product name introduced by a phrase like "founder of".
///
/// Rules are tried in declaration order. Within a rule, occurrences are
/// tried in text order, so a run too short to be a name (`founder of A.I.`)
/// does not hide a later one. The first run that passes length validation
/// wins.
#[must_use]
pub fn extract_company_name(text: &str) -> Option<String> {
    COMPANY_RULES
        .captures(text)
        .into_iter()
        .map(|capture| clip_to_words(capture.text, MAX_RUN_CHARS).trim().to_string())
        .find(|name| (MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&name.chars().count()))
}

/// Keep leading whole words of `run` while it fits in `max_chars`.
///
/// A first word longer than `max_chars` is cut at `max_chars`.
fn clip_to_words(run: &str, max_chars: usize) -> &str {
    if run.chars().count() <= max_chars {
        return run;
    }

    let cut = run
        .char_indices()
        .nth(max_chars)
        .map_or(run.len(), |(idx, _)| idx);
    let head = &run[..cut];
    // A word boundary right at the cut keeps the last word whole.
    if run[cut..].starts_with(char::is_whitespace) {
        return head;
    }
    match head.rfind(char::is_whitespace) {
        Some(space) => &head[..space],
        None => head,
    }
}
