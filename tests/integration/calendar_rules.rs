//! Calendar table lookups.

use chrono::NaiveDate;
use holiday::calendar::{self, HOLIDAYS, HolidayRange};

#[test]
fn every_holiday_matches_its_own_boundaries() {
    for range in HOLIDAYS {
        let (start_month, start_day) = range.start;
        let (end_month, end_day) = range.end;
        assert!(range.contains(start_month, start_day), "{} start", range.label);
        assert!(range.contains(end_month, end_day), "{} end", range.label);
    }
}

#[test]
fn first_entry_wins_on_overlap() {
    let table = [
        HolidayRange::new("winter", (12, 1), (12, 31)),
        HolidayRange::new("christmas", (12, 1), (12, 26)),
    ];
    let hit = calendar::match_in(&table, 12, 24).map(|r| r.label);
    assert_eq!(hit, Some("winter"));
}

#[test]
fn valentines_is_shadowed_by_lunar_new_year() {
    for day in 1..=15 {
        assert_eq!(calendar::match_date(2, day), Some("lunar_new_year"), "Feb {day}");
    }
}

#[test]
fn match_is_year_independent() {
    for year in [1999, 2024, 2031] {
        let date = NaiveDate::from_ymd_opt(year, 6, 15).unwrap();
        assert_eq!(calendar::match_naive_date(date), Some("pride"));
    }
}

#[test]
fn quiet_periods_have_no_match() {
    for (month, day) in [(3, 1), (9, 30), (10, 24), (11, 2), (11, 30), (1, 19), (7, 1)] {
        assert_eq!(calendar::match_date(month, day), None, "{month}/{day}");
    }
}
