//! Rental property model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{
    availability::{self, AvailabilityWindow, ValidationResult, Violation, NOT_BLANK_MESSAGE},
    booking::Booking,
    property_type::PropertyType,
    rate::RateSchedule,
};

/// Property record from database.
///
/// Availability dates are nullable in storage; a stored row may predate
/// validation of its window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Property {
    pub id: i32,
    pub availability_start: Option<NaiveDate>,
    pub availability_end: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub type_id: i32,
    pub owner_id: i32,
    /// Stored image file name
    pub image_name: Option<String>,
    /// Last image change
    pub updated_at: Option<DateTime<Utc>>,
    /// Adult nightly rate in cents
    pub adult_rate: i32,
    /// Child nightly rate in cents
    pub child_rate: i32,
}

impl Property {
    pub fn rates(&self) -> RateSchedule {
        RateSchedule::new(self.adult_rate, self.child_rate)
    }

    pub fn formatted_price(&self) -> String {
        self.rates().formatted_price()
    }

    /// The availability window, when both dates are set and ordered
    pub fn availability(&self) -> Option<AvailabilityWindow> {
        match (self.availability_start, self.availability_end) {
            (Some(start), Some(end)) => AvailabilityWindow::new(start, end).ok(),
            _ => None,
        }
    }

    /// Date-order check; only meaningful once both dates are present
    pub fn validate_availability(&self) -> Option<ValidationResult> {
        match (self.availability_start, self.availability_end) {
            (Some(start), Some(end)) => Some(availability::validate(start, end)),
            _ => None,
        }
    }

    /// Record a new stored image; the update timestamp follows the image
    pub fn set_image(&mut self, image_name: String, now: DateTime<Utc>) {
        self.image_name = Some(image_name);
        self.updated_at = Some(now);
    }

    /// Editable state as a draft, for merging partial updates
    pub fn to_draft(&self) -> PropertyDraft {
        PropertyDraft {
            availability_start: self.availability_start,
            availability_end: self.availability_end,
            type_id: Some(self.type_id),
            owner_id: Some(self.owner_id),
            adult_rate: Some(self.adult_rate),
            child_rate: Some(self.child_rate),
        }
    }
}

/// Unvalidated property input (create request)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PropertyDraft {
    /// Availability start (YYYY-MM-DD)
    #[validate(required)]
    pub availability_start: Option<NaiveDate>,
    /// Availability end (YYYY-MM-DD)
    #[validate(required)]
    pub availability_end: Option<NaiveDate>,
    #[validate(required)]
    pub type_id: Option<i32>,
    #[validate(required)]
    pub owner_id: Option<i32>,
    /// Adult nightly rate in cents
    #[validate(required, range(min = 0, code = "not_negative"))]
    pub adult_rate: Option<i32>,
    /// Child nightly rate in cents (defaults to 0)
    #[validate(range(min = 0, code = "not_negative"))]
    pub child_rate: Option<i32>,
}

/// A property that passed validation, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProperty {
    pub availability: AvailabilityWindow,
    pub type_id: i32,
    pub owner_id: i32,
    pub rates: RateSchedule,
}

impl PropertyDraft {
    /// Run presence checks then the availability rule.
    ///
    /// All violations are reported together, sorted by field.
    pub fn into_validated(self) -> Result<NewProperty, Vec<Violation>> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => Violation::from_validation_errors(&errors),
        };

        if let (Some(start), Some(end)) = (self.availability_start, self.availability_end) {
            if let ValidationResult::Invalid(v) = availability::validate(start, end) {
                violations.push(v);
                violations.sort_by(|a, b| a.field.cmp(&b.field));
            }
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        let (Some(start), Some(end), Some(type_id), Some(owner_id), Some(adult_rate)) = (
            self.availability_start,
            self.availability_end,
            self.type_id,
            self.owner_id,
            self.adult_rate,
        ) else {
            return Err(vec![Violation::new("property", NOT_BLANK_MESSAGE)]);
        };

        Ok(NewProperty {
            availability: AvailabilityWindow { start, end },
            type_id,
            owner_id,
            rates: RateSchedule::new(adult_rate, self.child_rate.unwrap_or(0)),
        })
    }

    /// Overlay the fields set in `update`
    pub fn apply(&mut self, update: &UpdateProperty) {
        if update.availability_start.is_some() {
            self.availability_start = update.availability_start;
        }
        if update.availability_end.is_some() {
            self.availability_end = update.availability_end;
        }
        if update.type_id.is_some() {
            self.type_id = update.type_id;
        }
        if update.owner_id.is_some() {
            self.owner_id = update.owner_id;
        }
        if update.adult_rate.is_some() {
            self.adult_rate = update.adult_rate;
        }
        if update.child_rate.is_some() {
            self.child_rate = update.child_rate;
        }
    }
}

/// Update property request (only set fields change)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProperty {
    pub availability_start: Option<NaiveDate>,
    pub availability_end: Option<NaiveDate>,
    pub type_id: Option<i32>,
    pub owner_id: Option<i32>,
    pub adult_rate: Option<i32>,
    pub child_rate: Option<i32>,
}

/// Query parameters for properties
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PropertyQuery {
    /// Filter by property type
    pub type_id: Option<i32>,
    /// Filter by owner
    pub owner_id: Option<i32>,
    /// Only properties available on this date (YYYY-MM-DD)
    pub available_on: Option<NaiveDate>,
    /// Page number (1-based)
    pub page: Option<i64>,
    /// Items per page
    pub per_page: Option<i64>,
}

/// Rate quote query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RateQuery {
    /// Number of adults (default 1)
    pub adults: Option<u32>,
    /// Number of children (default 0)
    pub children: Option<u32>,
    /// Night to price (YYYY-MM-DD, default today)
    pub date: Option<NaiveDate>,
}

/// Property with display data and its bookings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PropertyDetails {
    pub property: Property,
    pub property_type: PropertyType,
    /// Adult rate for display
    pub formatted_price: String,
    pub image_url: Option<String>,
    pub bookings: Vec<Booking>,
}
