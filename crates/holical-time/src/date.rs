//! `Date` type.
//!
//! Dates are stored as a serial number of days, so day arithmetic and the
//! "how many days away" figure are plain integer subtraction.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use chrono::Datelike;
use holical_core::ensure;
use holical_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar day with no time component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a strict ISO 8601 calendar date (`YYYY-MM-DD`).
    ///
    /// Exactly four year digits and two month and day digits are required;
    /// surrounding whitespace, times, and offsets are rejected.
    pub fn parse_iso(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        ensure!(
            b.len() == 10 && b[4] == b'-' && b[7] == b'-',
            "expected YYYY-MM-DD, got {s:?}"
        );
        let field = |range: std::ops::Range<usize>| -> Result<u16> {
            let part = &s[range];
            ensure!(
                part.bytes().all(|c| c.is_ascii_digit()),
                "non-numeric field {part:?} in {s:?}"
            );
            part.parse::<u16>()
                .map_err(|e| Error::Date(format!("{s:?}: {e}")))
        };
        let year = field(0..4)?;
        let month = field(5..7)?;
        let day = field(8..10)?;
        // Both fields are two digits, so they fit in a u8.
        Date::from_ymd(year, month as u8, day as u8)
    }

    /// Return the current local date from the wall clock.
    pub fn today() -> Result<Self> {
        let now = chrono::Local::now().date_naive();
        let year = u16::try_from(now.year())
            .map_err(|_| Error::Date(format!("year {} out of range", now.year())))?;
        // chrono guarantees month in 1..=12 and day in 1..=31.
        Date::from_ymd(year, now.month() as u8, now.day() as u8)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::ALL[self.month() as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 is a Monday.
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// Return `true` if this date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// The following calendar day, or `None` past [`Date::MAX`].
    pub fn succ(self) -> Option<Self> {
        self.add_days(1).ok()
    }

    /// The preceding calendar day, or `None` before [`Date::MIN`].
    pub fn pred(self) -> Option<Self> {
        self.add_days(-1).ok()
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// `YYYY-MM-DD`.
    pub fn iso(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}-{d:02}")
    }

    /// Long display form, e.g. `"Thursday, 1 May 2025"`.
    pub fn long_format(&self) -> String {
        format!("{}, {self}", self.weekday())
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, _, d) = ymd_from_serial(self.0);
        write!(f, "{d} {} {y}", self.month_of_year())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.iso())
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_iso(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Whole years since 1900, plus one day per leap year in [1901, year).
    let mut serial = (y - 1900) * 365 + (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1];
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    while serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    while remaining > days_in_month(y, m) as i32 {
        remaining -= days_in_month(y, m) as i32;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
