//! Additive treatment adapter: Implementation of TreatmentEffectModel.
//!
//! Relative risk reductions from distinct therapy classes are summed, not
//! multiplied. The sum is clamped into [0, 100].

use crate::domain::{StatinIntensity, TherapyPlan};
use crate::ports::TreatmentEffectModel;

/// Relative risk reduction (percent) contributed by each therapy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSizes {
    pub statin_moderate: f64,
    pub statin_high: f64,
    pub ezetimibe: f64,
    /// Counted only when LDL >= 1.8 mmol/L
    pub pcsk9_inhibitor: f64,
    /// Intensive SBP target below 130 mmHg
    pub sbp_target: f64,
}

impl Default for EffectSizes {
    fn default() -> Self {
        Self {
            statin_moderate: 25.0,
            statin_high: 35.0,
            ezetimibe: 6.0,
            pcsk9_inhibitor: 15.0,
            sbp_target: 15.0,
        }
    }
}

/// Additive composition of therapy effects.
#[derive(Debug, Clone, Default)]
pub struct AdditiveTreatmentModel {
    effects: EffectSizes,
}

impl AdditiveTreatmentModel {
    /// Create a model with the default effect sizes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model with custom effect sizes.
    #[must_use]
    pub fn with_effects(effects: EffectSizes) -> Self {
        Self { effects }
    }

    #[must_use]
    pub fn effects(&self) -> &EffectSizes {
        &self.effects
    }

    /// Unclamped sum of the contributions that apply.
    #[must_use]
    pub fn nominal_rrr(&self, plan: &TherapyPlan, ldl: f64) -> f64 {
        let e = &self.effects;
        let mut total = match plan.statin_intensity {
            StatinIntensity::None => 0.0,
            StatinIntensity::Moderate => e.statin_moderate,
            StatinIntensity::High => e.statin_high,
        };

        if plan.ezetimibe {
            total += e.ezetimibe;
        }
        if plan.pcsk9_inhibitor {
            if TherapyPlan::pcsk9_eligible(ldl) {
                total += e.pcsk9_inhibitor;
            } else {
                tracing::debug!("PCSK9 inhibitor ignored: LDL below eligibility threshold");
            }
        }
        if plan.sbp_target_below_130 {
            total += e.sbp_target;
        }

        total
    }
}

impl TreatmentEffectModel for AdditiveTreatmentModel {
    fn compute_rrr(&self, plan: &TherapyPlan, ldl: f64) -> f64 {
        self.nominal_rrr(plan, ldl).clamp(0.0, 100.0)
    }
}
