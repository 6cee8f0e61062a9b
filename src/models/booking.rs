//! Booking model and the property/booking association

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::availability::{validate_date_order, ValidationResult, Violation};

pub const BOOKING_ORDER_MESSAGE: &str =
    "La date d'arrivée doit être inférieure à la date de départ!";

/// Booking record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    /// Back-reference to the booked property (null once detached)
    pub property_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub adult_count: i16,
    pub child_count: i16,
    pub created_at: DateTime<Utc>,
}

/// Create booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub customer_id: Option<i32>,
    /// Arrival date (YYYY-MM-DD)
    pub arrival_date: NaiveDate,
    /// Departure date (YYYY-MM-DD)
    pub departure_date: NaiveDate,
    #[validate(range(min = 1, message = "Au moins un adulte est requis."))]
    pub adult_count: i16,
    #[serde(default)]
    #[validate(range(min = 0, code = "not_negative"))]
    pub child_count: i16,
}

impl CreateBooking {
    /// Field checks plus arrival strictly before departure
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => Violation::from_validation_errors(&errors),
        };
        if let ValidationResult::Invalid(v) = validate_date_order(
            self.arrival_date,
            self.departure_date,
            "arrival_date",
            BOOKING_ORDER_MESSAGE,
        ) {
            violations.push(v);
        }
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        violations
    }
}

/// A property together with the bookings that point at it.
///
/// Keeps both sides of the association consistent: a booking listed here
/// always has its back-reference set to `property_id`.
#[derive(Debug, Clone, Default)]
pub struct PropertyBookings {
    pub property_id: i32,
    bookings: Vec<Booking>,
}

impl PropertyBookings {
    pub fn new(property_id: i32) -> Self {
        Self {
            property_id,
            bookings: Vec::new(),
        }
    }

    /// Build from loaded rows, keeping only those pointing at the property
    pub fn from_rows(property_id: i32, rows: Vec<Booking>) -> Self {
        Self {
            property_id,
            bookings: rows
                .into_iter()
                .filter(|b| b.property_id == Some(property_id))
                .collect(),
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn contains(&self, booking_id: i32) -> bool {
        self.bookings.iter().any(|b| b.id == booking_id)
    }

    /// Add a booking and point it at this property. Returns false if it
    /// was already attached.
    pub fn attach(&mut self, mut booking: Booking) -> bool {
        if self.contains(booking.id) {
            return false;
        }
        booking.property_id = Some(self.property_id);
        self.bookings.push(booking);
        true
    }

    /// Remove a booking. Its back-reference is cleared only if it still
    /// points at this property.
    pub fn detach(&mut self, booking_id: i32) -> Option<Booking> {
        let idx = self.bookings.iter().position(|b| b.id == booking_id)?;
        let mut booking = self.bookings.remove(idx);
        if booking.property_id == Some(self.property_id) {
            booking.property_id = None;
        }
        Some(booking)
    }
}
