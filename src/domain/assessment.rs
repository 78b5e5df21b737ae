//! Assessment result types.
//!
//! Represents the output of one risk assessment: baseline and projected
//! 10-year risk, the composite relative risk reduction, and the tier.

use serde::{Deserialize, Serialize};

/// Risk tier derived from the projected 10-year risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Projected risk of 20% or less
    Moderate,
    /// Projected risk above 20% and up to 30%
    High,
    /// Projected risk above 30%
    VeryHigh,
}

impl RiskTier {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Moderate => "Moderate risk - Maintain current management",
            Self::High => "High risk - Optimize therapy",
            Self::VeryHigh => "Very high risk - Intensify treatment",
        }
    }

    /// Recommendations shown with this tier, in display order.
    #[must_use]
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Self::VeryHigh => &[
                "Intensive lipid lowering (target LDL <1.4 mmol/L)",
                "Consider PCSK9 inhibitor if LDL remains elevated",
                "Multidisciplinary risk factor management",
            ],
            Self::High => &[
                "Optimize statin therapy (high-intensity preferred)",
                "Target SBP <130 mmHg if tolerated",
                "Address all modifiable risk factors",
            ],
            Self::Moderate => &[
                "Maintain adherence to current therapies",
                "Focus on lifestyle interventions",
                "Annual risk reassessment",
            ],
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
            Self::VeryHigh => write!(f, "VERY HIGH"),
        }
    }
}

/// Engine output for one (profile, plan) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Untreated 10-year risk in percent, one decimal
    pub baseline_risk_percent: f64,

    /// Composite relative risk reduction in percent (0-100)
    pub relative_risk_reduction_percent: f64,

    /// Treated 10-year risk in percent, one decimal, never above baseline
    pub projected_risk_percent: f64,

    /// Tier of the projected risk
    pub risk_tier: RiskTier,

    /// Recommendations for the tier, in display order
    pub recommendations: Vec<String>,
}

impl AssessmentResult {
    /// Percentage points removed by the selected therapies, one decimal.
    #[must_use]
    pub fn absolute_risk_reduction(&self) -> f64 {
        super::round1(self.baseline_risk_percent - self.projected_risk_percent).max(0.0)
    }
}
