//! # holical
//!
//! Turns a yearly list of raw holidays into an enriched calendar: entries
//! annotated with display fields and a days-until figure, long-holiday
//! blocks that join adjacent holidays across weekends, and the next and
//! previous holiday relative to today.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holical::calendar::{process_at, ProcessorSettings};
//! use holical::time::{Date, Month};
//!
//! let payload = r#"[
//!     {"fecha": "2025-05-01", "tipo": "inamovible", "nombre": "Día del Trabajador"},
//!     {"fecha": "2025-05-02", "tipo": "puente", "nombre": "Puente turístico"}
//! ]"#.as_bytes();
//! let today = Date::from_ymd(2025, 4, 20).unwrap();
//! let settings = ProcessorSettings::default().with_skip_passed(true);
//! let calendar = process_at(payload, &settings, today).unwrap();
//!
//! let block = calendar.next_long_holiday().unwrap();
//! assert_eq!(block.len(), 4); // Thursday to Sunday
//! assert_eq!(calendar.holidays_in_month(Month::May).len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and cache freshness policy.
pub use holical_core as core;

/// `Date`, `Weekday`, and `Month`.
pub use holical_time as time;

/// Parsing, filtering, grouping, and the processed `Calendar`.
pub use holical_calendar as calendar;
