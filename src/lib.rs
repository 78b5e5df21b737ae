//! # smartrisk
//!
//! SMART-2 recurrent cardiovascular risk estimation with therapy effect
//! projection.
//!
//! This crate provides:
//! - 10-year baseline risk from the SMART-2 survival model
//! - Treatment-adjusted risk from additive relative risk reductions
//! - Risk tier classification with recommendations
//! - Terminal UI and a headless JSON front end
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core value types (PatientProfile, TherapyPlan, AssessmentResult)
//! - `ports`: Trait definitions for the risk models and the memo cache
//! - `adapters`: Concrete implementations (SMART-2, additive RRR, in-memory cache)
//! - `application`: The assessment engine and service
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use application::{AssessmentService, RiskAssessmentEngine};
pub use domain::{AssessmentResult, PatientProfile, RiskTier, TherapyPlan, ValidationError};

/// Result type for smartrisk operations
pub type Result<T> = std::result::Result<T, SmartRiskError>;

/// Main error type for smartrisk
#[derive(Debug, thiserror::Error)]
pub enum SmartRiskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The underlying error is the `source()`; report with `{:#}`.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// The underlying error is the `source()`; report with `{:#}`.
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_error_reported_once() {
        let parse_err = serde_json::from_str::<PatientProfile>("{").expect_err("Truncated input");
        let detail = parse_err.to_string();

        let report = format!("{:#}", anyhow::Error::from(SmartRiskError::from(parse_err)));
        assert!(report.starts_with("Serialization error: "));
        assert_eq!(report.matches(detail.as_str()).count(), 1);
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = SmartRiskError::from(ValidationError::from(domain::FieldError::OutOfRange {
            field: "age",
            value: 25.0,
            min: 30.0,
            max: 90.0,
        }));
        assert_eq!(
            err.to_string(),
            "Invalid assessment input: age 25 out of range [30, 90]"
        );
    }
}
