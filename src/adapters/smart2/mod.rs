//! SMART-2 adapter: Implementation of BaselineRiskModel.
//!
//! Linear predictor over fixed coefficients followed by a constant-hazard
//! survival transform over a 10-year horizon:
//!
//! ```text
//! risk = 100 * (1 - exp(-exp(lp) * 10))
//! ```

pub mod coefficients;

use crate::domain::{round1, PatientProfile, Sex};
use crate::ports::BaselineRiskModel;

use coefficients as c;

/// SMART-2 recurrent cardiovascular event model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Smart2Model;

impl Smart2Model {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renal function band. The bands are mutually exclusive.
    #[must_use]
    pub fn egfr_band(egfr: f64) -> f64 {
        if egfr < 30.0 {
            c::EGFR_BELOW_30
        } else if egfr < 60.0 {
            c::EGFR_30_TO_60
        } else {
            0.0
        }
    }

    /// Weighted sum of risk-factor contributions.
    ///
    /// Does not validate; call `PatientProfile::validate` first.
    #[must_use]
    pub fn linear_predictor(profile: &PatientProfile) -> f64 {
        let indicator = |present: bool| if present { 1.0 } else { 0.0 };

        c::INTERCEPT
            + c::AGE * (f64::from(profile.age) - c::AGE_CENTER)
            + c::FEMALE * indicator(profile.sex == Sex::Female)
            + c::DIABETES * indicator(profile.has_diabetes)
            + c::SMOKER * indicator(profile.is_smoker)
            + Self::egfr_band(profile.egfr)
            + c::POLYVASCULAR * indicator(profile.is_polyvascular())
            + c::LDL * (profile.ldl - c::LDL_CENTER)
            + c::SBP * (profile.sbp - c::SBP_CENTER)
    }

    /// Survival transform from linear predictor to unrounded risk percent.
    #[must_use]
    pub fn risk_from_linear_predictor(lp: f64) -> f64 {
        let hazard_term = (lp.exp() * c::HORIZON_YEARS).clamp(0.0, c::MAX_HAZARD_TERM);
        (100.0 * (1.0 - (-hazard_term).exp())).clamp(0.0, 100.0)
    }
}

impl BaselineRiskModel for Smart2Model {
    fn name(&self) -> &'static str {
        "SMART-2"
    }

    fn risk_for_validated(&self, profile: &PatientProfile) -> f64 {
        let lp = Self::linear_predictor(profile);
        let risk = round1(Self::risk_from_linear_predictor(lp));
        tracing::trace!(lp, risk, "SMART-2 baseline computed");
        risk
    }
}
