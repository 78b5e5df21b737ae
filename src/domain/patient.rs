//! Patient profile types for SMART-2 recurrent risk estimation.
//!
//! A profile is built by the caller (form, JSON request) and validated by
//! the engine before any computation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{FieldError, ValidationError, Violations};

/// Age domain in years.
pub const AGE_RANGE: (u32, u32) = (30, 90);

/// eGFR domain in mL/min/1.73m².
pub const EGFR_RANGE: (f64, f64) = (15.0, 120.0);

/// Number of vascular beds that can be affected.
pub const MAX_VASCULAR_BEDS: u8 = 3;

/// LDL cholesterol domain in mmol/L.
pub const LDL_RANGE: (f64, f64) = (0.5, 6.0);

/// Systolic blood pressure domain in mmHg.
pub const SBP_RANGE: (f64, f64) = (80.0, 220.0);

/// Biological sex as used by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Label used for display and serialization.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(FieldError::UnknownVariant {
                field: "sex",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.as_str().to_string()
    }
}

/// Demographic and clinical inputs of one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Age in years (30-90)
    pub age: u32,

    pub sex: Sex,

    /// Diagnosed diabetes mellitus
    pub has_diabetes: bool,

    /// Current smoker
    pub is_smoker: bool,

    /// eGFR in mL/min/1.73m² (15-120)
    pub egfr: f64,

    /// Coronary, cerebrovascular and peripheral disease present (0-3)
    pub vascular_bed_count: u8,

    /// LDL cholesterol in mmol/L (0.5-6.0)
    pub ldl: f64,

    /// Systolic blood pressure in mmHg (80-220)
    pub sbp: f64,
}

impl PatientProfile {
    /// Validate that all fields are within their documented domains.
    ///
    /// # Errors
    /// Returns a `ValidationError` listing every out-of-domain field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();

        violations.check_range(
            "age",
            f64::from(self.age),
            f64::from(AGE_RANGE.0)..=f64::from(AGE_RANGE.1),
        );
        violations.check_range("egfr", self.egfr, EGFR_RANGE.0..=EGFR_RANGE.1);
        violations.check_range(
            "vascular_bed_count",
            f64::from(self.vascular_bed_count),
            0.0..=f64::from(MAX_VASCULAR_BEDS),
        );
        violations.check_range("ldl", self.ldl, LDL_RANGE.0..=LDL_RANGE.1);
        violations.check_range("sbp", self.sbp, SBP_RANGE.0..=SBP_RANGE.1);

        violations.finish()
    }

    /// Disease in two or more vascular beds.
    #[must_use]
    pub fn is_polyvascular(&self) -> bool {
        self.vascular_bed_count >= 2
    }
}

/// Vascular beds with established disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VascularHistory {
    pub coronary: bool,
    pub cerebrovascular: bool,
    pub peripheral: bool,
}

impl VascularHistory {
    /// Count of affected beds, as stored in `PatientProfile::vascular_bed_count`.
    #[must_use]
    pub fn bed_count(&self) -> u8 {
        [self.coronary, self.cerebrovascular, self.peripheral]
            .into_iter()
            .filter(|&present| present)
            .count() as u8
    }
}

/// Weight and height. Informational; never used by the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Weight in kg (40-200)
    pub weight_kg: f64,

    /// Height in cm (140-210)
    pub height_cm: f64,
}

impl BodyMeasurements {
    /// Validate measurement ranges.
    ///
    /// # Errors
    /// Returns a `ValidationError` listing every out-of-range measurement.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        violations.check_range("weight_kg", self.weight_kg, 40.0..=200.0);
        violations.check_range("height_cm", self.height_cm, 140.0..=210.0);
        violations.finish()
    }

    /// Body mass index in kg/m², rounded to one decimal.
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let meters = self.height_cm / 100.0;
        super::round1(self.weight_kg / (meters * meters))
    }
}
