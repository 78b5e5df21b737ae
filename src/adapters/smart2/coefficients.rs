//! SMART-2 model coefficients.
//!
//! Dorresteijn JAN et al. Eur Heart J 2019;40(37):3133-3140.
//! Fixed literature values; the crate never refits them.

/// Intercept of the linear predictor
pub const INTERCEPT: f64 = -8.1937;

/// Per year of age, centered at `AGE_CENTER`
pub const AGE: f64 = 0.0635;
pub const AGE_CENTER: f64 = 60.0;

/// Female sex
pub const FEMALE: f64 = -0.3372;

/// Diabetes mellitus
pub const DIABETES: f64 = 0.5034;

/// Current smoking
pub const SMOKER: f64 = 0.7862;

/// eGFR below 30 mL/min/1.73m²
pub const EGFR_BELOW_30: f64 = 0.9235;

/// eGFR 30 to below 60 mL/min/1.73m²
pub const EGFR_30_TO_60: f64 = 0.5539;

/// Disease in two or more vascular beds
pub const POLYVASCULAR: f64 = 0.5434;

/// Per mmol/L of LDL, centered at `LDL_CENTER`
pub const LDL: f64 = 0.2436;
pub const LDL_CENTER: f64 = 2.5;

/// Per mmHg of systolic pressure, centered at `SBP_CENTER`
pub const SBP: f64 = 0.0083;
pub const SBP_CENTER: f64 = 120.0;

/// Prediction horizon in years
pub const HORIZON_YEARS: f64 = 10.0;

/// Upper bound on the cumulative hazard before the survival transform.
///
/// `exp(-50)` is below f64 resolution next to 1.0, so the risk is already
/// 100% there.
pub const MAX_HAZARD_TERM: f64 = 50.0;
