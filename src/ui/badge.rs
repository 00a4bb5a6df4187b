use crate::constants::{MODERATE_SCORE_THRESHOLD, SAFE_SCORE_THRESHOLD};

/// Display band for a 0-10 safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyBand {
    High,
    Medium,
    Low,
}

impl SafetyBand {
    /// Lower bounds are inclusive. NaN lands in `Low`.
    pub fn classify(score: f64) -> Self {
        if score >= SAFE_SCORE_THRESHOLD {
            SafetyBand::High
        } else if score >= MODERATE_SCORE_THRESHOLD {
            SafetyBand::Medium
        } else {
            SafetyBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SafetyBand::High => "Safe",
            SafetyBand::Medium => "Moderate",
            SafetyBand::Low => "Risky",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SafetyBand::High => "safety-high",
            SafetyBand::Medium => "safety-medium",
            SafetyBand::Low => "safety-low",
        }
    }
}
