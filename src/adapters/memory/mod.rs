//! In-memory adapter: Bounded implementation of AssessmentCache.
//!
//! # Mutex Behavior
//!
//! A poisoned mutex degrades to a cache miss and a dropped insert. The
//! engine result is always available without the cache.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{AssessmentResult, PatientProfile, Sex, TherapyPlan};
use crate::ports::AssessmentCache;

/// Hashable identity of a (profile, plan) pair.
///
/// Floating-point fields are compared by bit pattern; validated inputs are
/// finite, so equal values have equal bits (apart from `-0.0`, which is out
/// of every domain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    age: u32,
    female: bool,
    has_diabetes: bool,
    is_smoker: bool,
    egfr: u64,
    vascular_bed_count: u8,
    ldl: u64,
    sbp: u64,
    plan: TherapyPlan,
}

impl CacheKey {
    fn new(profile: &PatientProfile, plan: &TherapyPlan) -> Self {
        Self {
            age: profile.age,
            female: profile.sex == Sex::Female,
            has_diabetes: profile.has_diabetes,
            is_smoker: profile.is_smoker,
            egfr: profile.egfr.to_bits(),
            vascular_bed_count: profile.vascular_bed_count,
            ldl: profile.ldl.to_bits(),
            sbp: profile.sbp.to_bits(),
            plan: *plan,
        }
    }
}

/// Memo cache holding at most `capacity` results.
///
/// When full, new results are not stored.
#[derive(Debug)]
pub struct MemoryCache {
    entries: Mutex<HashMap<CacheKey, AssessmentResult>>,
    capacity: usize,
}

impl MemoryCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::with_capacity(capacity.min(1024))),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl AssessmentCache for MemoryCache {
    fn get(&self, profile: &PatientProfile, plan: &TherapyPlan) -> Option<AssessmentResult> {
        let entries = self.entries.lock().ok()?;
        entries.get(&CacheKey::new(profile, plan)).cloned()
    }

    fn put(&self, profile: &PatientProfile, plan: &TherapyPlan, result: &AssessmentResult) {
        let Ok(mut entries) = self.entries.lock() else {
            tracing::warn!("Assessment cache lock poisoned; result not cached");
            return;
        };
        let key = CacheKey::new(profile, plan);
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            return;
        }
        entries.insert(key, result.clone());
    }

    fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskTier, StatinIntensity};

    fn profile(age: u32) -> PatientProfile {
        PatientProfile {
            age,
            sex: Sex::Female,
            has_diabetes: true,
            is_smoker: false,
            egfr: 45.0,
            vascular_bed_count: 2,
            ldl: 2.2,
            sbp: 150.0,
        }
    }

    fn result() -> AssessmentResult {
        AssessmentResult {
            baseline_risk_percent: 12.3,
            relative_risk_reduction_percent: 25.0,
            projected_risk_percent: 9.2,
            risk_tier: RiskTier::Moderate,
            recommendations: vec!["Annual risk reassessment".to_string()],
        }
    }

    #[test]
    fn test_roundtrip() {
        let cache = MemoryCache::new(8);
        let plan = TherapyPlan::default();
        assert!(cache.get(&profile(60), &plan).is_none());

        cache.put(&profile(60), &plan, &result());
        assert_eq!(cache.get(&profile(60), &plan), Some(result()));
        assert_eq!(cache.len(), 1);

        let other_plan = TherapyPlan {
            statin_intensity: StatinIntensity::High,
            ..plan
        };
        assert!(cache.get(&profile(60), &other_plan).is_none());
        assert!(cache.get(&profile(61), &plan).is_none());
    }

    #[test]
    fn test_capacity_bound() {
        let cache = MemoryCache::new(2);
        let plan = TherapyPlan::default();
        for age in 60..65 {
            cache.put(&profile(age), &plan, &result());
        }
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&profile(64), &plan).is_none());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = MemoryCache::new(0);
        cache.put(&profile(60), &TherapyPlan::default(), &result());
        assert!(cache.is_empty());
    }
}
