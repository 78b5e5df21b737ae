//! Risk assessment engine: Pure orchestration of the risk models.
//!
//! profile -> baseline risk; (baseline, plan, ldl) -> RRR + projected risk;
//! projected risk -> tier + recommendations.

use crate::adapters::smart2::Smart2Model;
use crate::adapters::treatment::AdditiveTreatmentModel;
use crate::domain::{
    AssessmentResult, PatientProfile, RiskClassifier, TherapyPlan, ValidationError,
};
use crate::ports::{BaselineRiskModel, TreatmentEffectModel};

/// Stateless engine turning (profile, plan) into an `AssessmentResult`.
///
/// Holds only immutable model parameters, so a shared reference can be used
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessmentEngine<B = Smart2Model, T = AdditiveTreatmentModel>
where
    B: BaselineRiskModel,
    T: TreatmentEffectModel,
{
    baseline: B,
    treatment: T,
    classifier: RiskClassifier,
}

impl RiskAssessmentEngine {
    /// Engine with the SMART-2 baseline and default additive effects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B, T> RiskAssessmentEngine<B, T>
where
    B: BaselineRiskModel,
    T: TreatmentEffectModel,
{
    /// Create an engine from explicit models.
    pub fn with_models(baseline: B, treatment: T) -> Self {
        Self {
            baseline,
            treatment,
            classifier: RiskClassifier::default(),
        }
    }

    /// Name of the baseline model.
    #[must_use]
    pub fn model_name(&self) -> &'static str {
        self.baseline.name()
    }

    /// Run a full assessment.
    ///
    /// Validation happens before any computation; either the whole result
    /// is returned or nothing is computed.
    ///
    /// # Errors
    /// Returns `ValidationError` if any profile field is out of its domain.
    pub fn assess(
        &self,
        profile: &PatientProfile,
        plan: &TherapyPlan,
    ) -> Result<AssessmentResult, ValidationError> {
        profile.validate()?;

        let baseline = self.baseline.risk_for_validated(profile).clamp(0.0, 100.0);
        let rrr = self.treatment.compute_rrr(plan, profile.ldl).clamp(0.0, 100.0);
        let projected = self.treatment.apply_treatment(baseline, rrr).clamp(0.0, baseline);
        let classification = self.classifier.classify(projected);

        Ok(AssessmentResult {
            baseline_risk_percent: baseline,
            relative_risk_reduction_percent: rrr,
            projected_risk_percent: projected,
            risk_tier: classification.tier,
            recommendations: classification.recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::treatment::EffectSizes;
    use crate::domain::{RiskTier, Sex, StatinIntensity};

    fn profile() -> PatientProfile {
        PatientProfile {
            age: 65,
            sex: Sex::Male,
            has_diabetes: false,
            is_smoker: false,
            egfr: 60.0,
            vascular_bed_count: 0,
            ldl: 3.0,
            sbp: 140.0,
        }
    }

    #[test]
    fn test_assess_scenario_a() {
        let plan = TherapyPlan {
            statin_intensity: StatinIntensity::High,
            ezetimibe: true,
            ..TherapyPlan::default()
        };
        let result = RiskAssessmentEngine::new()
            .assess(&profile(), &plan)
            .expect("Should assess");

        assert_eq!(result.baseline_risk_percent, 0.5);
        assert_eq!(result.relative_risk_reduction_percent, 41.0);
        assert_eq!(result.projected_risk_percent, 0.3);
        assert_eq!(result.risk_tier, RiskTier::Moderate);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn test_validation_precedes_computation() {
        let invalid = PatientProfile {
            ldl: 7.0,
            ..profile()
        };
        let err = RiskAssessmentEngine::new()
            .assess(&invalid, &TherapyPlan::default())
            .expect_err("Should reject");
        assert!(err.has_field("ldl"));
    }

    #[test]
    fn test_custom_effects_clamp() {
        let engine = RiskAssessmentEngine::with_models(
            Smart2Model::new(),
            AdditiveTreatmentModel::with_effects(EffectSizes {
                statin_high: 70.0,
                ezetimibe: 20.0,
                pcsk9_inhibitor: 20.0,
                sbp_target: 20.0,
                ..EffectSizes::default()
            }),
        );
        let plan = TherapyPlan {
            statin_intensity: StatinIntensity::High,
            ezetimibe: true,
            pcsk9_inhibitor: true,
            sbp_target_below_130: true,
        };
        let result = engine.assess(&profile(), &plan).expect("Should assess");
        assert_eq!(result.relative_risk_reduction_percent, 100.0);
        assert_eq!(result.projected_risk_percent, 0.0);
        assert_eq!(engine.model_name(), "SMART-2");
    }

    /// Treatment model whose projection ignores the baseline bound.
    struct OvershootingTreatment {
        offset: f64,
    }

    impl TreatmentEffectModel for OvershootingTreatment {
        fn compute_rrr(&self, _plan: &TherapyPlan, _ldl: f64) -> f64 {
            0.0
        }

        fn apply_treatment(&self, baseline_risk: f64, _rrr_percent: f64) -> f64 {
            baseline_risk + self.offset
        }
    }

    #[test]
    fn test_projected_clamped_into_baseline() {
        let plan = TherapyPlan::default();

        let above = RiskAssessmentEngine::with_models(
            Smart2Model::new(),
            OvershootingTreatment { offset: 10.0 },
        );
        let result = above.assess(&profile(), &plan).expect("Should assess");
        assert_eq!(result.projected_risk_percent, result.baseline_risk_percent);

        let below = RiskAssessmentEngine::with_models(
            Smart2Model::new(),
            OvershootingTreatment { offset: -50.0 },
        );
        let result = below.assess(&profile(), &plan).expect("Should assess");
        assert_eq!(result.projected_risk_percent, 0.0);
    }

    /// Baseline model that counts its calls and accepts any profile.
    #[derive(Default)]
    struct CountingBaseline {
        calls: std::sync::atomic::AtomicUsize,
    }

    impl BaselineRiskModel for CountingBaseline {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn risk_for_validated(&self, _profile: &PatientProfile) -> f64 {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            50.0
        }
    }

    #[test]
    fn test_engine_validates_for_any_baseline_model() {
        let engine =
            RiskAssessmentEngine::with_models(CountingBaseline::default(), AdditiveTreatmentModel::new());
        let invalid = PatientProfile {
            age: 25,
            ..profile()
        };

        let err = engine
            .assess(&invalid, &TherapyPlan::default())
            .expect_err("Should reject");
        assert!(err.has_field("age"));
        assert_eq!(
            engine.baseline.calls.load(std::sync::atomic::Ordering::SeqCst),
            0
        );

        engine
            .assess(&profile(), &TherapyPlan::default())
            .expect("Should assess");
        assert_eq!(
            engine.baseline.calls.load(std::sync::atomic::Ordering::SeqCst),
            1
        );
    }
}
