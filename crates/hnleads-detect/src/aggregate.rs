//! Deduplication of leads by author and final ranking.

use std::collections::HashMap;

use hnleads_core::Lead;

/// What [`LeadCollection::offer`] did with a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// First lead seen for this author.
    Inserted,
    /// Replaced a lead with strictly lower confidence.
    Replaced { previous_confidence: u8 },
    /// Discarded; the retained lead has equal or higher confidence.
    Kept { retained_confidence: u8 },
}

/// At most one lead per author, in first-encounter order.
///
/// A lead for a known author replaces the stored one only when its confidence
/// is strictly higher; the replacement takes over the original slot, so ties
/// in the final ranking fall back to when the author was first seen.
#[derive(Debug, Default)]
pub struct LeadCollection {
    slots: HashMap<String, usize>,
    leads: Vec<Lead>,
    offered: usize,
}

impl LeadCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, lead: Lead) -> Offer {
        self.offered += 1;

        if let Some(&slot) = self.slots.get(&lead.author) {
            let current = &mut self.leads[slot];
            if lead.confidence > current.confidence {
                let previous_confidence = current.confidence;
                *current = lead;
                return Offer::Replaced {
                    previous_confidence,
                };
            }
            return Offer::Kept {
                retained_confidence: current.confidence,
            };
        }

        self.slots.insert(lead.author.clone(), self.leads.len());
        self.leads.push(lead);
        Offer::Inserted
    }

    /// Number of distinct authors retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Number of leads passed to [`Self::offer`], duplicates included.
    #[must_use]
    pub fn offered(&self) -> usize {
        self.offered
    }

    #[must_use]
    pub fn get(&self, author: &str) -> Option<&Lead> {
        self.slots.get(author).map(|&slot| &self.leads[slot])
    }

    /// Retained leads, highest confidence first. Equal confidences keep
    /// first-encounter order.
    #[must_use]
    pub fn into_ranked(self) -> Vec<Lead> {
        let mut leads = self.leads;
        leads.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        leads
    }
}

impl Extend<Lead> for LeadCollection {
    fn extend<I: IntoIterator<Item = Lead>>(&mut self, iter: I) {
        for lead in iter {
            self.offer(lead);
        }
    }
}

impl FromIterator<Lead> for LeadCollection {
    fn from_iter<I: IntoIterator<Item = Lead>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}
