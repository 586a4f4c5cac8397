use std::sync::LazyLock;

use crate::patterns::RuleSet;

/// Domains that never count as a lead's own website.
pub const EXCLUDED_DOMAINS: &[&str] = &[
    "twitter.com",
    "github.com",
    "linkedin.com",
    "facebook.com",
    "ycombinator.com",
    "news.ycombinator.com",
];

static URL_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(&[(
        "url",
        r"https?://(?:www\.)?([a-z0-9-]+\.[a-z]{2,}(?:\.[a-z]{2,})?(?:/\S*)?)",
    )])
});

/// First non-social URL in `text`, normalized to `https://domain[/path]`.
///
/// The scheme and any `www.` prefix are dropped before normalizing.
#[must_use]
pub fn extract_website(text: &str) -> Option<String> {
    URL_RULES
        .captures(text)
        .into_iter()
        .map(|capture| capture.text)
        .find(|host_and_path| !is_excluded(host_and_path))
        .map(|host_and_path| format!("https://{host_and_path}"))
}

fn is_excluded(host_and_path: &str) -> bool {
    let domain = host_and_path
        .split('/')
        .next()
        .unwrap_or(host_and_path)
        .to_ascii_lowercase();
    EXCLUDED_DOMAINS
        .iter()
        .any(|excluded| domain.contains(excluded))
}
