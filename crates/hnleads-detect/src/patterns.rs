//! Named, ordered, case-insensitive regular-expression rule sets.
//!
//! A [`RuleSet`] is the only place patterns are compiled. Rules keep their
//! declaration order, which callers rely on for tie-breaking: capture lists
//! come back rule by rule, then in text order within a rule.

use regex::{Regex, RegexBuilder};

/// A single compiled rule.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    regex: Regex,
}

/// One capture produced by [`RuleSet::captures`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCapture<'t> {
    /// Name of the rule that produced the capture.
    pub rule: &'static str,
    /// Capture group 1, or the whole match for rules without a group.
    pub text: &'t str,
}

/// Ordered list of case-insensitive rules.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile `(name, pattern)` pairs in order.
    ///
    /// Patterns are matched case-insensitively; a rule can opt a sub-pattern
    /// back into case-sensitive matching with `(?-i:...)`.
    ///
    /// # Panics
    ///
    /// Panics if a pattern does not compile. Rule sets are built from string
    /// literals at first use, so this is a programming error.
    #[must_use]
    pub fn new(specs: &[(&'static str, &str)]) -> Self {
        let rules = specs
            .iter()
            .map(|&(name, pattern)| Rule {
                name,
                regex: RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap_or_else(|e| panic!("invalid rule pattern for '{name}': {e}")),
            })
            .collect();
        Self { rules }
    }

    /// `true` if any rule matches anywhere in `text`.
    #[must_use]
    pub fn is_match_any(&self, text: &str) -> bool {
        self.rules.iter().any(|rule| rule.regex.is_match(text))
    }

    /// Names of the rules that match `text`, in declaration order.
    pub fn matching<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.regex.is_match(text))
            .map(|rule| rule.name)
    }

    /// Every capture of every rule: declaration order, then text order.
    #[must_use]
    pub fn captures<'t>(&self, text: &'t str) -> Vec<RuleCapture<'t>> {
        self.rules
            .iter()
            .flat_map(|rule| {
                rule.regex
                    .captures_iter(text)
                    .filter_map(move |caps| capture_text(&caps).map(|t| (rule.name, t)))
            })
            .map(|(rule, text)| RuleCapture { rule, text })
            .collect()
    }
}

fn capture_text<'t>(caps: &regex::Captures<'t>) -> Option<&'t str> {
    caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str())
}
