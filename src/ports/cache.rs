//! Cache port: Trait for memoizing assessments.
//!
//! Assessments are pure, so a cached result is always interchangeable with
//! a fresh one. No correctness depends on the cache.

use crate::domain::{AssessmentResult, PatientProfile, TherapyPlan};

/// Trait for assessment memoization keyed by (profile, plan) equality.
pub trait AssessmentCache: Send + Sync {
    /// Look up a previously stored result.
    fn get(&self, profile: &PatientProfile, plan: &TherapyPlan) -> Option<AssessmentResult>;

    /// Store a result. Implementations may drop it (e.g. when full).
    fn put(&self, profile: &PatientProfile, plan: &TherapyPlan, result: &AssessmentResult);

    /// Number of stored results.
    fn len(&self) -> usize;

    /// Whether the cache holds no results.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all stored results.
    fn clear(&self);
}

/// A cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl AssessmentCache for NoCache {
    fn get(&self, _profile: &PatientProfile, _plan: &TherapyPlan) -> Option<AssessmentResult> {
        None
    }

    fn put(&self, _profile: &PatientProfile, _plan: &TherapyPlan, _result: &AssessmentResult) {}

    fn len(&self) -> usize {
        0
    }

    fn clear(&self) {}
}
