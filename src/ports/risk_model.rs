//! Risk model ports: Traits for the baseline and treatment-effect models.
//!
//! The engine depends only on these traits; the SMART-2 coefficients and the
//! additive treatment composition live in adapters.

use crate::domain::{round1, PatientProfile, TherapyPlan, ValidationError};

/// Computes the untreated 10-year risk from a patient profile.
///
/// Implementations must be deterministic and total over valid profiles.
pub trait BaselineRiskModel: Send + Sync {
    /// Short model name for reports and logs.
    fn name(&self) -> &'static str;

    /// Baseline 10-year risk in percent (0-100, one decimal) for a profile
    /// that has already passed `PatientProfile::validate`.
    fn risk_for_validated(&self, profile: &PatientProfile) -> f64;

    /// Validate the profile, then compute the baseline 10-year risk.
    ///
    /// # Errors
    /// Returns `ValidationError` if any profile field is out of its domain.
    fn compute_baseline_risk(&self, profile: &PatientProfile) -> Result<f64, ValidationError> {
        profile.validate()?;
        Ok(self.risk_for_validated(profile))
    }
}

/// Computes a composite relative risk reduction and applies it.
pub trait TreatmentEffectModel: Send + Sync {
    /// Composite relative risk reduction in percent, clamped into [0, 100].
    ///
    /// `ldl` is the patient's LDL in mmol/L; therapies with an LDL
    /// precondition contribute nothing when it is not met.
    fn compute_rrr(&self, plan: &TherapyPlan, ldl: f64) -> f64;

    /// Apply a relative risk reduction to a baseline risk.
    ///
    /// The result is rounded to one decimal and clamped into
    /// `[0, baseline_risk]`.
    fn apply_treatment(&self, baseline_risk: f64, rrr_percent: f64) -> f64 {
        let rrr = rrr_percent.clamp(0.0, 100.0);
        let projected = round1(baseline_risk * (1.0 - rrr / 100.0));
        projected.clamp(0.0, baseline_risk.max(0.0))
    }
}
