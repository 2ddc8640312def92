//! Fact-check result record and its display classification.

use serde::{Deserialize, Serialize};

/// Structured verdict for a single claim. Every field is populated on every
/// path; interpretation substitutes placeholder text when nothing was
/// extracted. Built fresh per query and discarded after display/save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckResult {
    pub verdict: String,
    pub explanation: String,
    pub corrections: String,
}

impl FactCheckResult {
    pub fn new(
        verdict: impl Into<String>,
        explanation: impl Into<String>,
        corrections: impl Into<String>,
    ) -> Self {
        Self {
            verdict: verdict.into(),
            explanation: explanation.into(),
            corrections: corrections.into(),
        }
    }

    /// Display emphasis for the verdict, matched in order against the
    /// lowercased label ("true" before "false" before "partially").
    pub fn tone(&self) -> VerdictTone {
        let verdict = self.verdict.to_lowercase();
        if verdict.contains("true") {
            VerdictTone::Affirmed
        } else if verdict.contains("false") {
            VerdictTone::Refuted
        } else if verdict.contains("partially") {
            VerdictTone::Partial
        } else {
            VerdictTone::Neutral
        }
    }
}

/// Visual emphasis bucket used by the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Affirmed,
    Refuted,
    Partial,
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_verdict(verdict: &str) -> FactCheckResult {
        FactCheckResult::new(verdict, "explanation", "corrections")
    }

    #[test]
    fn tone_buckets() {
        assert_eq!(with_verdict("Likely True").tone(), VerdictTone::Affirmed);
        assert_eq!(with_verdict("Likely False").tone(), VerdictTone::Refuted);
        assert_eq!(with_verdict("Partially True").tone(), VerdictTone::Affirmed);
        assert_eq!(with_verdict("Partially Accurate").tone(), VerdictTone::Partial);
        assert_eq!(with_verdict("Undetermined").tone(), VerdictTone::Neutral);
        assert_eq!(with_verdict("Error").tone(), VerdictTone::Neutral);
    }

    #[test]
    fn tone_checks_true_before_false() {
        // A combined label reads as affirmed; order is part of the contract.
        assert_eq!(
            with_verdict("True and False").tone(),
            VerdictTone::Affirmed
        );
    }
}
