//! Season table, availability and price formatting rules
//!
//! Exercised through the public library API, without a database.

use chrono::{Duration, NaiveDate};

use camping_rental::models::{
    availability::{validate, AVAILABILITY_ORDER_MESSAGE, AVAILABILITY_START_FIELD},
    format_major_units, season_containing, PropertyDraft, Season, ValidationResult,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Every day from `from` to `to`, both included
fn days(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let count = (to - from).num_days();
    (0..=count).map(move |offset| from + Duration::days(offset))
}

#[test]
fn test_open_season_outside_high_season() {
    for year in [2023, 2024] {
        for d in days(date(year, 5, 5), date(year, 6, 20)).chain(days(date(year, 9, 1), date(year, 10, 10))) {
            assert_eq!(season_containing(d), Some(Season::Open), "{d}");
        }
    }
}

#[test]
fn test_high_season_days() {
    for year in [2023, 2024] {
        for d in days(date(year, 6, 21), date(year, 8, 31)) {
            assert_eq!(season_containing(d), Some(Season::High), "{d}");
        }
    }
}

#[test]
fn test_closed_outside_open_season() {
    for year in [2023, 2024] {
        for d in days(date(year, 1, 1), date(year, 5, 4)).chain(days(date(year, 10, 11), date(year, 12, 31))) {
            assert_eq!(season_containing(d), None, "{d}");
        }
    }
}

#[test]
fn test_season_ignores_year() {
    assert_eq!(season_containing(date(1999, 7, 14)), season_containing(date(2031, 7, 14)));
    assert_eq!(season_containing(date(2024, 2, 29)), None);
}

#[test]
fn test_validate_date_order() {
    let day = date(2024, 6, 1);

    let equal = validate(day, day);
    assert!(!equal.is_valid());

    let reversed = validate(date(2024, 6, 2), day);
    assert!(!reversed.is_valid());

    assert_eq!(validate(day, date(2024, 6, 2)), ValidationResult::Valid);
}

#[test]
fn test_invalid_result_targets_start_field() {
    let violation = validate(date(2024, 6, 1), date(2024, 6, 1))
        .violation()
        .expect("equal dates are rejected");

    assert_eq!(violation.field, AVAILABILITY_START_FIELD);
    assert_eq!(violation.message, AVAILABILITY_ORDER_MESSAGE);
    assert_eq!(
        violation.message,
        "La date de début de disponibilité doit être inférieur à la date de fin de disponibilité!"
    );
}

#[test]
fn test_format_major_units() {
    assert_eq!(format_major_units(123456), "1 235");
    assert_eq!(format_major_units(100), "1");
    assert_eq!(format_major_units(999), "10");
    assert_eq!(format_major_units(0), "0");
    assert_eq!(format_major_units(123456789), "1 234 568");
}

#[test]
fn test_repeated_calls_agree() {
    let d = date(2024, 8, 31);
    assert_eq!(season_containing(d), season_containing(d));

    let (start, end) = (date(2024, 5, 1), date(2024, 5, 10));
    assert_eq!(validate(start, end), validate(start, end));
    assert_eq!(validate(end, start), validate(end, start));
}

fn draft(start: NaiveDate, end: NaiveDate) -> PropertyDraft {
    PropertyDraft {
        availability_start: Some(start),
        availability_end: Some(end),
        type_id: Some(1),
        owner_id: Some(1),
        adult_rate: Some(2500),
        child_rate: Some(1200),
    }
}

#[test]
fn test_property_with_ordered_window_is_accepted() {
    let property = draft(date(2024, 5, 1), date(2024, 5, 10))
        .into_validated()
        .expect("ordered window is valid");

    assert_eq!(property.availability.start, date(2024, 5, 1));
    assert_eq!(property.availability.end, date(2024, 5, 10));
    assert_eq!(property.rates.adult_rate, 2500);
}

#[test]
fn test_property_with_single_day_window_is_rejected() {
    let violations = draft(date(2024, 6, 1), date(2024, 6, 1))
        .into_validated()
        .expect_err("equal dates are invalid");

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, AVAILABILITY_START_FIELD);
    assert_eq!(violations[0].message, AVAILABILITY_ORDER_MESSAGE);
}
