//! Ports layer: Trait definitions for replaceable parts.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and the concrete risk models and caches.

mod cache;
mod risk_model;

pub use cache::{AssessmentCache, NoCache};
pub use risk_model::{BaselineRiskModel, TreatmentEffectModel};
