//! Input validation errors.
//!
//! Every out-of-domain field is a caller error. Validation collects all
//! violations instead of stopping at the first one so a form can show them
//! together.

use std::ops::RangeInclusive;

/// A single field that falls outside its documented domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}: unrecognized value '{value}'")]
    UnknownVariant { field: &'static str, value: String },
}

impl FieldError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } | Self::UnknownVariant { field, .. } => field,
        }
    }
}

/// Raised when a patient profile or therapy plan is outside its domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid assessment input: {}", join_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Whether `field` is among the violations.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

/// Accumulates field violations during a `validate()` pass.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<FieldError>);

impl Violations {
    /// Record a violation when `value` is not finite or not inside `range`.
    pub(crate) fn check_range(&mut self, field: &'static str, value: f64, range: RangeInclusive<f64>) {
        if !value.is_finite() || !range.contains(&value) {
            self.0.push(FieldError::OutOfRange {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors: self.0 })
        }
    }
}
