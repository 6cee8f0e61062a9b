//! Data models for the camping rental server

pub mod availability;
pub mod booking;
pub mod image;
pub mod period;
pub mod property;
pub mod property_type;
pub mod rate;
pub mod user;

// Re-export commonly used types
pub use availability::{AvailabilityWindow, ValidationResult, Violation};
pub use booking::{Booking, PropertyBookings};
pub use period::{season_containing, Season, SeasonWindow, HIGH_SEASON, OPEN_SEASON};
pub use property::{NewProperty, Property, PropertyDetails, PropertyDraft};
pub use property_type::PropertyType;
pub use rate::{format_major_units, nightly_rate, RateSchedule};
pub use user::User;
