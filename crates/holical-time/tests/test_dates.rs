//! Integration tests for `Date`, `Weekday`, and `Month`.

use holical_time::date::{days_in_month, is_leap_year};
use holical_time::{Date, Month, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consecutive_serials_are_consecutive_days() {
    let mut d = date(1999, 12, 25);
    let end = date(2001, 1, 10);
    let mut expected_weekday = d.weekday().ordinal();
    while d < end {
        let next = d.succ().unwrap();
        assert_eq!(next - d, 1);
        expected_weekday = expected_weekday % 7 + 1;
        assert_eq!(next.weekday().ordinal(), expected_weekday, "at {next:?}");
        if next.day_of_month() == 1 {
            assert_eq!(d.day_of_month(), days_in_month(d.year(), d.month()));
        } else {
            assert_eq!(next.day_of_month(), d.day_of_month() + 1);
        }
        d = next;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert!(Date::from_ymd(2023, 2, 29).is_err());
    assert_eq!(date(2024, 3, 1) - date(2024, 2, 28), 2);
}

#[test]
fn known_weekdays_2025() {
    // May 2025: 1st is Thursday, 3rd/4th form a weekend.
    assert_eq!(date(2025, 5, 1).weekday(), Weekday::Thursday);
    assert_eq!(date(2025, 5, 2).weekday(), Weekday::Friday);
    assert_eq!(date(2025, 5, 3).weekday(), Weekday::Saturday);
    assert_eq!(date(2025, 5, 4).weekday(), Weekday::Sunday);
    assert_eq!(date(2025, 5, 5).weekday(), Weekday::Monday);
    assert_eq!(date(2025, 12, 25).weekday(), Weekday::Thursday);
}

#[test]
fn month_of_year() {
    assert_eq!(date(2025, 7, 9).month_of_year(), Month::July);
    assert_eq!(date(2025, 7, 9).month_of_year().name(), "July");
}

#[test]
fn serde_uses_iso_strings() {
    let d = date(2025, 3, 24);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-03-24\"");
    let back: Date = serde_json::from_str("\"2025-03-24\"").unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"24/03/2025\"").is_err());
}

#[test]
fn today_is_in_range() {
    let today = Date::today().unwrap();
    assert!(today > date(2020, 1, 1));
}

proptest! {
    #[test]
    fn parse_accepts_every_formatted_date(serial in 1i32..=109_573) {
        let d = Date::MIN.add_days(serial - 1).unwrap();
        prop_assert_eq!(Date::parse_iso(&d.iso()).unwrap(), d);
    }

    #[test]
    fn days_between_matches_subtraction(a in 1i32..=109_573, b in 1i32..=109_573) {
        let da = Date::MIN.add_days(a - 1).unwrap();
        let db = Date::MIN.add_days(b - 1).unwrap();
        prop_assert_eq!(da.days_between(db), db - da);
        prop_assert_eq!(da.days_between(db), b - a);
    }
}
