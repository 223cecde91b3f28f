//! Month arithmetic for the calendar grid and the month query.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column the grid starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn day_names(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

/// Half-open range `[start, next_start)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: NaiveDate,
    next_start: NaiveDate,
}

impl MonthRange {
    /// `None` when `month` is outside 1..=12 or the year is not representable.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_start = start.checked_add_months(Months::new(1))?;
        Some(Self { start, next_start })
    }

    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn next_start(&self) -> NaiveDate {
        self.next_start
    }

    /// Number of days in the month.
    pub fn days(&self) -> u32 {
        (self.next_start - self.start).num_days() as u32
    }

    /// The `day`-th day of the month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        self.start.with_day(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.next_start
    }

    /// Empty cells before day 1 in a seven-column grid.
    pub fn leading_blanks(&self, week_start: WeekStart) -> u32 {
        let weekday = self.start.weekday();
        match week_start {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::containing(self.next_start)
    }

    pub fn previous(&self) -> Option<Self> {
        let start = self.start.checked_sub_months(Months::new(1))?;
        Self::containing(start)
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start.format("%B %Y"))
    }
}
