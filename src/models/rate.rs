//! Nightly rates and price display

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::period::Season;

/// Per-person nightly rates of a property, in minor currency units (cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct RateSchedule {
    pub adult_rate: i32,
    #[serde(default)]
    pub child_rate: i32,
}

impl RateSchedule {
    pub fn new(adult_rate: i32, child_rate: i32) -> Self {
        Self { adult_rate, child_rate }
    }

    /// Adult rate rendered for display, e.g. "1 235"
    pub fn formatted_price(&self) -> String {
        format_major_units(i64::from(self.adult_rate))
    }
}

/// Nightly total for a guest composition, in minor units.
///
/// Adults and children are charged their own per-person rate; there is no
/// seasonal surcharge. Returns `None` when the total does not fit in an `i64`.
pub fn nightly_rate(adult_count: u32, child_count: u32, rates: &RateSchedule) -> Option<i64> {
    let adults = i64::from(adult_count).checked_mul(i64::from(rates.adult_rate))?;
    let children = i64::from(child_count).checked_mul(i64::from(rates.child_rate))?;
    adults.checked_add(children)
}

/// Render minor units as whole major units: rounded half away from zero,
/// thousands separated by a space, no decimal part.
pub fn format_major_units(minor_units: i64) -> String {
    let major = (minor_units.unsigned_abs() + 50) / 100;
    let digits = major.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if minor_units < 0 && major > 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Nightly rate quote returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RateQuote {
    pub adults: u32,
    pub children: u32,
    /// Total per night in minor units
    pub nightly_rate: i64,
    /// Total per night for display
    pub formatted_rate: String,
    /// Season of the requested date (null when the campground is closed)
    pub season: Option<Season>,
    /// Whether the requested date lies in the property's availability window
    pub available: bool,
}
