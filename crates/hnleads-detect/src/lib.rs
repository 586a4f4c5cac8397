//! Founder detection and lead extraction for Hacker News content.
//!
//! Everything in this crate is synchronous and total over its input: rule
//! sets are compiled once, classification and extraction never fail, and the
//! worst case for malformed text is an empty result. Retrieval lives in
//! `hnleads-hn`; orchestration lives in the CLI.

pub mod aggregate;
pub mod assemble;
pub mod classifier;
pub mod extract;
pub mod patterns;
pub mod stats;

pub use aggregate::{LeadCollection, Offer};
pub use assemble::{assemble_lead, Rejection};
pub use classifier::{classify, FounderVerdict};
pub use extract::{extract_company_name, extract_pain_points, extract_website};
pub use patterns::{RuleCapture, RuleSet};
pub use stats::LeadStats;
