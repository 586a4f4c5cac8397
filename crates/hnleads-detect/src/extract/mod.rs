//! Field extractors: website, company name and pain points.
//!
//! Each extractor is independent and total: no match yields `None` or an
//! empty list, never an error.

mod company;
mod pain_points;
mod website;

pub use company::extract_company_name;
pub use pain_points::{extract_pain_points, MAX_PAIN_POINTS};
pub use website::{extract_website, EXCLUDED_DOMAINS};
