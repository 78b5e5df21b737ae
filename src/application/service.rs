//! Assessment service: Engine plus memoization and logging.
//!
//! Log lines carry only derived percentages and the tier, never raw
//! patient values.

use crate::adapters::smart2::Smart2Model;
use crate::adapters::treatment::AdditiveTreatmentModel;
use crate::domain::{AssessmentResult, PatientProfile, TherapyPlan};
use crate::ports::{AssessmentCache, BaselineRiskModel, TreatmentEffectModel};
use crate::SmartRiskError;

use super::engine::RiskAssessmentEngine;

/// Service for running assessments for a presentation layer.
pub struct AssessmentService<C, B = Smart2Model, T = AdditiveTreatmentModel>
where
    C: AssessmentCache,
    B: BaselineRiskModel,
    T: TreatmentEffectModel,
{
    engine: RiskAssessmentEngine<B, T>,
    cache: C,
}

impl<C, B, T> AssessmentService<C, B, T>
where
    C: AssessmentCache,
    B: BaselineRiskModel,
    T: TreatmentEffectModel,
{
    /// Create a new assessment service.
    pub fn new(engine: RiskAssessmentEngine<B, T>, cache: C) -> Self {
        Self { engine, cache }
    }

    /// Run (or recall) an assessment.
    ///
    /// # Errors
    /// Returns `SmartRiskError::Validation` if the inputs are out of domain.
    pub fn assess(
        &self,
        profile: &PatientProfile,
        plan: &TherapyPlan,
    ) -> Result<AssessmentResult, SmartRiskError> {
        if let Some(result) = self.cache.get(profile, plan) {
            tracing::debug!(tier = %result.risk_tier, "Assessment served from cache");
            return Ok(result);
        }

        let result = self.engine.assess(profile, plan).map_err(|e| {
            tracing::warn!(violations = e.errors.len(), "Assessment rejected: {}", e);
            SmartRiskError::from(e)
        })?;

        tracing::info!(
            model = self.engine.model_name(),
            "Assessment complete: baseline={:.1}%, rrr={:.0}%, projected={:.1}%, tier={}",
            result.baseline_risk_percent,
            result.relative_risk_reduction_percent,
            result.projected_risk_percent,
            result.risk_tier
        );

        self.cache.put(profile, plan, &result);
        Ok(result)
    }

    /// Name of the baseline model.
    #[must_use]
    pub fn model_name(&self) -> &'static str {
        self.engine.model_name()
    }

    /// Number of memoized assessments.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Forget all memoized assessments.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryCache;
    use crate::domain::{RiskTier, Sex, StatinIntensity};
    use crate::ports::NoCache;

    fn create_test_service() -> AssessmentService<MemoryCache> {
        AssessmentService::new(RiskAssessmentEngine::new(), MemoryCache::new(16))
    }

    fn scenario_b() -> (PatientProfile, TherapyPlan) {
        (
            PatientProfile {
                age: 80,
                sex: Sex::Male,
                has_diabetes: true,
                is_smoker: true,
                egfr: 25.0,
                vascular_bed_count: 3,
                ldl: 5.0,
                sbp: 180.0,
            },
            TherapyPlan {
                statin_intensity: StatinIntensity::High,
                ezetimibe: true,
                pcsk9_inhibitor: true,
                sbp_target_below_130: true,
            },
        )
    }

    #[test]
    fn test_assessment_is_memoized() {
        let service = create_test_service();
        let (profile, plan) = scenario_b();

        let first = service.assess(&profile, &plan).expect("Should assess");
        assert_eq!(service.cached_count(), 1);
        let second = service.assess(&profile, &plan).expect("Should assess");
        assert_eq!(first, second);
        assert_eq!(first.risk_tier, RiskTier::Moderate);

        service.clear_cache();
        assert_eq!(service.cached_count(), 0);
    }

    #[test]
    fn test_validation_error_not_cached() {
        let service = create_test_service();
        let (mut profile, plan) = scenario_b();
        profile.age = 25;

        let err = service.assess(&profile, &plan).expect_err("Should reject");
        assert!(matches!(err, SmartRiskError::Validation(_)));
        assert_eq!(service.cached_count(), 0);
    }

    #[test]
    fn test_without_cache() {
        let service = AssessmentService::new(RiskAssessmentEngine::new(), NoCache);
        let (profile, plan) = scenario_b();
        let result = service.assess(&profile, &plan).expect("Should assess");
        assert_eq!(result.projected_risk_percent, 10.8);
        assert_eq!(service.cached_count(), 0);
        assert_eq!(service.model_name(), "SMART-2");
    }
}
