//! Summary statistics derived from a final lead list.

use hnleads_core::Lead;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadStats {
    pub total: usize,
    pub with_website: usize,
    pub with_company: usize,
    pub with_pain_points: usize,
    /// Mean confidence; `None` for an empty list.
    pub average_confidence: Option<f64>,
}

impl LeadStats {
    #[must_use]
    pub fn from_leads(leads: &[Lead]) -> Self {
        let total = leads.len();
        let with_website = leads.iter().filter(|l| l.website.is_some()).count();
        let with_company = leads.iter().filter(|l| l.company_name.is_some()).count();
        let with_pain_points = leads.iter().filter(|l| !l.pain_points.is_empty()).count();

        let average_confidence = if leads.is_empty() {
            None
        } else {
            let sum: u64 = leads.iter().map(|l| u64::from(l.confidence)).sum();
            #[allow(clippy::cast_precision_loss)]
            let avg = sum as f64 / total as f64;
            Some(avg)
        };

        Self {
            total,
            with_website,
            with_company,
            with_pain_points,
            average_confidence,
        }
    }
}

impl std::fmt::Display for LeadStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Unique founder leads: {}", self.total)?;
        writeln!(f, "With website:         {}", self.with_website)?;
        writeln!(f, "With company name:    {}", self.with_company)?;
        write!(f, "With pain points:     {}", self.with_pain_points)?;
        if let Some(avg) = self.average_confidence {
            write!(f, "\nAverage confidence:   {avg:.1}%")?;
        }
        Ok(())
    }
}
