//! # holical-time
//!
//! Calendar-day `Date`, `Weekday`, and `Month` types used by the holiday
//! processing pipeline.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
