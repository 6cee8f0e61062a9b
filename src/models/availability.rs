//! Availability windows and date-order validation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Field path the availability order violation is attached to
pub const AVAILABILITY_START_FIELD: &str = "availability_start";

pub const AVAILABILITY_ORDER_MESSAGE: &str =
    "La date de début de disponibilité doit être inférieur à la date de fin de disponibilité!";

pub const NOT_BLANK_MESSAGE: &str = "Cette valeur ne doit pas être vide.";

pub const NOT_NEGATIVE_MESSAGE: &str = "Cette valeur doit être supérieure ou égale à 0.";

/// Validation code for non-negative amounts and counts
pub const NOT_NEGATIVE_CODE: &str = "not_negative";

/// Message for a rule that declares a code but no message of its own
fn message_for_code(code: &str) -> Option<&'static str> {
    match code {
        "required" => Some(NOT_BLANK_MESSAGE),
        NOT_NEGATIVE_CODE => Some(NOT_NEGATIVE_MESSAGE),
        _ => None,
    }
}

/// A field-level validation failure, shown to the user next to the field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    /// Field path (e.g. "availability_start")
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flatten field errors from the `validator` crate, sorted by field
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut violations: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = match (&e.message, message_for_code(&e.code)) {
                        (Some(m), _) => m.to_string(),
                        (None, Some(m)) => m.to_string(),
                        (None, None) => e.code.to_string(),
                    };
                    Violation::new(field.clone(), message)
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        violations
    }
}

/// Outcome of a validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Violation),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violation(self) -> Option<Violation> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(v) => Some(v),
        }
    }
}

/// Strict ordering check shared by availability windows and bookings.
/// Equal dates are rejected.
pub fn validate_date_order(
    start: NaiveDate,
    end: NaiveDate,
    field: &str,
    message: &str,
) -> ValidationResult {
    if start >= end {
        ValidationResult::Invalid(Violation::new(field, message))
    } else {
        ValidationResult::Valid
    }
}

/// Availability rule: the start date must be strictly before the end date
pub fn validate(start: NaiveDate, end: NaiveDate) -> ValidationResult {
    validate_date_order(start, end, AVAILABILITY_START_FIELD, AVAILABILITY_ORDER_MESSAGE)
}

/// A checked availability range, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct AvailabilityWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AvailabilityWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Violation> {
        match validate(start, end) {
            ValidationResult::Valid => Ok(Self { start, end }),
            ValidationResult::Invalid(v) => Err(v),
        }
    }

    /// Whether the property can be booked on `date`
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
