//! Read-only clients for the Hacker News Algolia search API and the
//! Firebase user API.
//!
//! Responses are normalized into [`hnleads_core::RawItem`] and
//! [`hnleads_core::UserProfile`] before they leave this crate.

pub mod client;
pub mod error;
pub mod gate;
pub mod normalize;
pub mod types;

mod retry;

pub use client::{HnClient, HnClientConfig};
pub use error::HnError;
pub use gate::RequestGate;
