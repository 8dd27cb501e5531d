//! Calendar heuristic: guess the holiday theme from the current date.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::trace;

/// A named month/day range, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolidayRange {
    pub label: &'static str,
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl HolidayRange {
    pub const fn new(label: &'static str, start: (u32, u32), end: (u32, u32)) -> Self {
        Self { label, start, end }
    }

    /// Whether `month`/`day` falls inside this range.
    ///
    /// Ranges crossing December into January are not supported: the
    /// "strictly between" arm never fires for them.
    pub const fn contains(&self, month: u32, day: u32) -> bool {
        let (start_month, start_day) = self.start;
        let (end_month, end_day) = self.end;
        (month == start_month && day >= start_day)
            || (month == end_month && day <= end_day)
            || (month > start_month && month < end_month)
    }
}

/// Holiday ranges in priority order. The first match wins.
pub const HOLIDAYS: &[HolidayRange] = &[
    HolidayRange::new("halloween", (10, 25), (11, 1)),
    HolidayRange::new("christmas", (12, 1), (12, 31)),
    HolidayRange::new("lunar_new_year", (1, 20), (2, 20)),
    HolidayRange::new("valentines", (2, 10), (2, 14)),
    HolidayRange::new("pride", (6, 1), (6, 30)),
];

/// Match a date against an ordered table.
pub fn match_in<'a>(table: &'a [HolidayRange], month: u32, day: u32) -> Option<&'a HolidayRange> {
    let found = table.iter().find(|range| range.contains(month, day));
    trace!(month, day, matched = ?found.map(|r| r.label), "Calendar lookup");
    found
}

/// Match a date against [`HOLIDAYS`].
pub fn match_date(month: u32, day: u32) -> Option<&'static str> {
    match_in(HOLIDAYS, month, day).map(|range| range.label)
}

pub fn match_naive_date(date: NaiveDate) -> Option<&'static str> {
    match_date(date.month(), date.day())
}

/// Source of "today" for the detector.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Clock fixed to `month`/`day` of `year`, or `None` for an impossible date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
