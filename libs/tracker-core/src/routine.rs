//! Calendar-based routine scheduling.
//!
//! Training follows a fixed weekly rotation: A on Monday and Thursday, B on
//! Tuesday and Friday, C on Wednesday, and rest over the weekend.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::RoutineCode;

/// Routine scheduled for the given date.
pub fn routine_for_date(date: NaiveDate) -> RoutineCode {
    match date.weekday() {
        Weekday::Mon | Weekday::Thu => RoutineCode::A,
        Weekday::Tue | Weekday::Fri => RoutineCode::B,
        Weekday::Wed => RoutineCode::C,
        Weekday::Sat | Weekday::Sun => RoutineCode::Weekend,
    }
}

/// Monday-to-Sunday week, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

impl WeekRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.sunday
    }

    /// The seven dates of the week, Monday first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.monday.iter_days().take(7)
    }
}

/// Week containing `date`.
///
/// Sunday counts as day 7 of the week rather than day 0, so a Sunday maps to
/// the week that started six days earlier.
pub fn week_range_for_date(date: NaiveDate) -> WeekRange {
    let days_since_monday = i64::from(date.weekday().number_from_monday()) - 1;
    let monday = date - Duration::days(days_since_monday);
    WeekRange {
        monday,
        sunday: monday + Duration::days(6),
    }
}
