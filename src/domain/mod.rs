//! Domain layer: Core value types and rules.
//!
//! This module contains pure Rust types with no I/O.
//! All types are serializable and implement strict validation.

mod assessment;
mod classifier;
mod patient;
mod therapy;
mod validation;

pub use assessment::{AssessmentResult, RiskTier};
pub use classifier::{Classification, RiskClassifier, TierThreshold, TIER_LADDER};
pub use patient::{
    BodyMeasurements, PatientProfile, Sex, VascularHistory, AGE_RANGE, EGFR_RANGE, LDL_RANGE,
    MAX_VASCULAR_BEDS, SBP_RANGE,
};
pub use therapy::{
    StatinIntensity, TherapyPlan, INTENSIVE_SBP_TARGET, PCSK9_MIN_LDL, SBP_TARGET_RANGE,
};
pub use validation::{FieldError, ValidationError};

/// Round half-up to one decimal place.
///
/// Inputs here are non-negative percentages, where `f64::round` (half away
/// from zero) is half-up.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
