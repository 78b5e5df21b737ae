//! Application layer: Use cases and services.
//!
//! This module orchestrates domain rules with the risk model ports to
//! implement the assessment use case.

mod engine;
mod service;

pub use engine::RiskAssessmentEngine;
pub use service::AssessmentService;
