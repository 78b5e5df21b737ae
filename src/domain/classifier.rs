//! Threshold table mapping projected risk to a tier.

use super::assessment::RiskTier;

/// One rung of the tier ladder: risks strictly above `exclusive_lower_bound`
/// fall into `tier`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThreshold {
    pub exclusive_lower_bound: f64,
    pub tier: RiskTier,
}

/// Ladder evaluated top-down, first match wins. The last rung catches
/// everything else.
pub const TIER_LADDER: [TierThreshold; 3] = [
    TierThreshold {
        exclusive_lower_bound: 30.0,
        tier: RiskTier::VeryHigh,
    },
    TierThreshold {
        exclusive_lower_bound: 20.0,
        tier: RiskTier::High,
    },
    TierThreshold {
        exclusive_lower_bound: f64::NEG_INFINITY,
        tier: RiskTier::Moderate,
    },
];

/// Tier plus its recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub tier: RiskTier,
    pub recommendations: Vec<String>,
}

/// Maps a projected risk percentage to a tier.
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    ladder: Vec<TierThreshold>,
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self {
            ladder: TIER_LADDER.to_vec(),
        }
    }
}

impl RiskClassifier {
    /// Classify a projected risk percentage.
    #[must_use]
    pub fn classify(&self, projected_risk: f64) -> Classification {
        let tier = self
            .ladder
            .iter()
            .find(|rung| projected_risk > rung.exclusive_lower_bound)
            .map_or(RiskTier::Moderate, |rung| rung.tier);

        Classification {
            tier,
            recommendations: tier
                .recommendations()
                .iter()
                .map(|r| (*r).to_string())
                .collect(),
        }
    }
}
