//! Campground seasons (open season and high season)
//!
//! Seasons recur every year and are expressed as inclusive (day, month)
//! ranges without a year component.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Days elapsed before the first of each month in a leap year.
const LEAP_YEAR_MONTH_OFFSETS: [u32; 12] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

const LEAP_YEAR_MONTH_LENGTHS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar day with no year component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct DayMonth {
    pub day: u32,
    pub month: u32,
}

impl DayMonth {
    /// Build a day/month pair, rejecting days that exist in no year
    pub fn new(day: u32, month: u32) -> Option<Self> {
        let length = *LEAP_YEAR_MONTH_LENGTHS.get(month.checked_sub(1)? as usize)?;
        (1..=length).contains(&day).then_some(Self { day, month })
    }

    /// Day-of-year within a leap reference year, so that Feb 29 has its own slot
    pub fn ordinal(&self) -> u32 {
        LEAP_YEAR_MONTH_OFFSETS[(self.month - 1) as usize] + self.day
    }
}

impl From<NaiveDate> for DayMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for DayMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month)
    }
}

/// Named pricing seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Campground open to guests
    Open,
    /// Peak demand, nested in the open season
    High,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Open => "open",
            Season::High => "high",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A yearly recurring, inclusive season range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeasonWindow {
    pub season: Season,
    pub start: DayMonth,
    pub end: DayMonth,
}

impl SeasonWindow {
    /// Whether the range runs past Dec 31 into the next year
    pub fn wraps_year(&self) -> bool {
        self.end.ordinal() < self.start.ordinal()
    }

    pub fn contains_day(&self, day: DayMonth) -> bool {
        let (start, end, o) = (self.start.ordinal(), self.end.ordinal(), day.ordinal());
        if self.wraps_year() {
            o >= start || o <= end
        } else {
            start <= o && o <= end
        }
    }

    /// Whether `date` falls in this season, whatever its year
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.contains_day(DayMonth::from(date))
    }

    /// Whether every day of `other` also falls in this window
    pub fn encloses(&self, other: &SeasonWindow) -> bool {
        if !self.contains_day(other.start) || !self.contains_day(other.end) {
            return false;
        }
        match (self.wraps_year(), other.wraps_year()) {
            // only a window covering the whole year holds one that wraps
            (false, true) => self.start.ordinal() == 1 && self.end.ordinal() == 366,
            (true, false) => {
                // both ends inside, so other must not straddle the gap between end and start
                let gap_start = self.end.ordinal();
                !(other.start.ordinal() <= gap_start && other.end.ordinal() >= self.start.ordinal())
            }
            (false, false) => true,
            (true, true) => {
                other.start.ordinal() >= self.start.ordinal() && other.end.ordinal() <= self.end.ordinal()
            }
        }
    }
}

/// Campground opening: May 5 to Oct 10
pub const OPEN_SEASON: SeasonWindow = SeasonWindow {
    season: Season::Open,
    start: DayMonth { day: 5, month: 5 },
    end: DayMonth { day: 10, month: 10 },
};

/// High season: Jun 21 to Aug 31
pub const HIGH_SEASON: SeasonWindow = SeasonWindow {
    season: Season::High,
    start: DayMonth { day: 21, month: 6 },
    end: DayMonth { day: 31, month: 8 },
};

/// Season table, most specific first
pub const SEASONS: [SeasonWindow; 2] = [HIGH_SEASON, OPEN_SEASON];

/// The most specific season containing `date`, or `None` when the
/// campground is closed.
pub fn season_containing(date: NaiveDate) -> Option<Season> {
    season_in(&SEASONS, date)
}

/// Lookup over an arbitrary table; the first matching window wins.
pub fn season_in(table: &[SeasonWindow], date: NaiveDate) -> Option<Season> {
    table.iter().find(|w| w.contains(date)).map(|w| w.season)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_open_season_bounds() {
        assert_eq!(season_containing(date(2024, 5, 4)), None);
        assert_eq!(season_containing(date(2024, 5, 5)), Some(Season::Open));
        assert_eq!(season_containing(date(2024, 6, 20)), Some(Season::Open));
        assert_eq!(season_containing(date(2024, 9, 1)), Some(Season::Open));
        assert_eq!(season_containing(date(2024, 10, 10)), Some(Season::Open));
        assert_eq!(season_containing(date(2024, 10, 11)), None);
    }

    #[test]
    fn test_high_season_wins_over_open() {
        assert_eq!(season_containing(date(2023, 6, 21)), Some(Season::High));
        assert_eq!(season_containing(date(2023, 7, 14)), Some(Season::High));
        assert_eq!(season_containing(date(2023, 8, 31)), Some(Season::High));
    }

    #[test]
    fn test_year_is_ignored() {
        for year in [1999, 2024, 2031] {
            assert_eq!(season_containing(date(year, 7, 1)), Some(Season::High));
            assert_eq!(season_containing(date(year, 1, 15)), None);
        }
    }

    #[test]
    fn test_wraparound_window() {
        let winter = SeasonWindow {
            season: Season::Open,
            start: DayMonth { day: 1, month: 12 },
            end: DayMonth { day: 15, month: 1 },
        };
        assert!(winter.wraps_year());
        assert!(winter.contains(date(2024, 12, 31)));
        assert!(winter.contains(date(2025, 1, 1)));
        assert!(winter.contains(date(2025, 1, 15)));
        assert!(!winter.contains(date(2025, 1, 16)));
        assert!(!winter.contains(date(2024, 11, 30)));
    }

    #[test]
    fn test_leap_day() {
        let feb = SeasonWindow {
            season: Season::Open,
            start: DayMonth { day: 28, month: 2 },
            end: DayMonth { day: 1, month: 3 },
        };
        assert!(feb.contains(date(2024, 2, 29)));
        assert!(feb.contains(date(2023, 3, 1)));
        assert!(!feb.contains(date(2023, 3, 2)));
    }

    #[test]
    fn test_day_month_validation() {
        assert!(DayMonth::new(29, 2).is_some());
        assert!(DayMonth::new(30, 2).is_none());
        assert!(DayMonth::new(0, 5).is_none());
        assert!(DayMonth::new(1, 13).is_none());
        assert!(DayMonth::new(31, 8).is_some());
    }

    #[test]
    fn test_high_season_nests_in_open_season() {
        assert!(OPEN_SEASON.encloses(&HIGH_SEASON));
        assert!(!HIGH_SEASON.encloses(&OPEN_SEASON));
    }

    #[test]
    fn test_encloses_with_wraparound() {
        let winter = SeasonWindow {
            season: Season::Open,
            start: DayMonth { day: 1, month: 11 },
            end: DayMonth { day: 31, month: 3 },
        };
        let holidays = SeasonWindow {
            season: Season::High,
            start: DayMonth { day: 20, month: 12 },
            end: DayMonth { day: 5, month: 1 },
        };
        let january = SeasonWindow {
            season: Season::High,
            start: DayMonth { day: 1, month: 1 },
            end: DayMonth { day: 31, month: 1 },
        };
        assert!(winter.encloses(&holidays));
        assert!(winter.encloses(&january));
        assert!(!january.encloses(&winter));
        assert!(!OPEN_SEASON.encloses(&holidays));
    }
}
