//! Adapters layer: Concrete implementations of ports.
//!
//! - `smart2`: SMART-2 baseline risk model
//! - `treatment`: additive relative risk reduction
//! - `memory`: bounded in-memory assessment cache

pub mod memory;
pub mod smart2;
pub mod treatment;
