//! Therapy selection types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{FieldError, ValidationError, Violations};

/// LDL (mmol/L) at or above which a PCSK9 inhibitor contributes.
pub const PCSK9_MIN_LDL: f64 = 1.8;

/// SBP target (mmHg) below which intensive blood pressure control counts.
pub const INTENSIVE_SBP_TARGET: f64 = 130.0;

/// Domain of a numeric SBP target in mmHg.
pub const SBP_TARGET_RANGE: (f64, f64) = (80.0, 220.0);

/// Statin intensity. The variants are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatinIntensity {
    #[default]
    None,
    Moderate,
    High,
}

impl StatinIntensity {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for StatinIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatinIntensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(FieldError::UnknownVariant {
                field: "statin_intensity",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl TryFrom<String> for StatinIntensity {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatinIntensity> for String {
    fn from(intensity: StatinIntensity) -> Self {
        intensity.as_str().to_string()
    }
}

/// Selected interventions for one assessment.
///
/// `pcsk9_inhibitor` is stored as given; whether it counts depends on the
/// patient's LDL and is decided by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TherapyPlan {
    pub statin_intensity: StatinIntensity,
    pub ezetimibe: bool,
    pub pcsk9_inhibitor: bool,
    pub sbp_target_below_130: bool,
}

impl TherapyPlan {
    /// Derive the intensive blood pressure flag from a numeric SBP target.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the target is outside 80-220 mmHg.
    pub fn sbp_target_from_mmhg(target: f64) -> Result<bool, ValidationError> {
        let mut violations = Violations::default();
        violations.check_range(
            "sbp_target",
            target,
            SBP_TARGET_RANGE.0..=SBP_TARGET_RANGE.1,
        );
        violations.finish()?;
        Ok(target < INTENSIVE_SBP_TARGET)
    }

    /// Whether a PCSK9 inhibitor is clinically meaningful at this LDL.
    #[must_use]
    pub fn pcsk9_eligible(ldl: f64) -> bool {
        ldl >= PCSK9_MIN_LDL
    }
}
