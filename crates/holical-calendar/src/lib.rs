//! # holical-calendar
//!
//! Turns a yearly list of raw holidays into an enriched, queryable
//! [`Calendar`].
//!
//! The pipeline runs in one direction:
//!
//! 1. [`raw::decode`] reads a JSON array of [`RawHoliday`] records.
//! 2. [`parser::parse_holidays`] drops malformed dates and applies the
//!    skip-passed / skip-weekends / skip-today filters.
//! 3. [`grouping::group_adjacent`] sorts the survivors and links runs of
//!    adjacent holidays, plus their bordering weekends, into long-holiday
//!    [`Group`]s.
//! 4. [`Calendar::new`] locates the next and previous holidays.
//!
//! The evaluation date is resolved once per call, so every "today" check in
//! one invocation agrees.  Nothing here performs I/O or keeps state between
//! calls.
//!
//! ```
//! use holical_calendar::{process_at, ProcessorSettings};
//! use holical_time::Date;
//!
//! let payload = br#"[{"fecha":"2025-05-02","tipo":"puente","nombre":"Puente"}]"#;
//! let today = Date::from_ymd(2025, 4, 1).unwrap();
//! let calendar = process_at(payload, &ProcessorSettings::default(), today).unwrap();
//!
//! let next = calendar.next.as_ref().unwrap();
//! assert_eq!(next.days_until, 31);
//! // Friday holiday: Saturday and Sunday complete the long weekend.
//! assert_eq!(next.group().unwrap().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The processed `Calendar` and its queries.
pub mod calendar;

/// `Entry`, `Category`, and `Group`.
pub mod entry;

/// Run partitioning, weekend expansion, and cross-linking.
pub mod grouping;

/// Record parser and exclusion filters.
pub mod parser;

/// Raw records and payload decoding.
pub mod raw;

/// `ProcessorSettings` and `AdjacencyPolicy`.
pub mod settings;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use entry::{Category, Entry, Group};
pub use raw::RawHoliday;
pub use settings::{AdjacencyPolicy, ProcessorSettings};

use holical_core::errors::Result;
use holical_time::Date;

/// Run the pipeline on a raw JSON payload.
///
/// "Today" is `settings.evaluation_date`, or the local date read once from
/// the wall clock.
///
/// # Errors
/// Returns [`Error::Decode`](holical_core::Error::Decode) if `bytes` is not a
/// JSON array of records.  Records with malformed dates are dropped.
pub fn process(bytes: &[u8], settings: &ProcessorSettings) -> Result<Calendar> {
    let today = settings.resolve_today()?;
    process_at(bytes, settings, today)
}

/// Run the pipeline on a raw JSON payload against an explicit `today`.
///
/// `settings.evaluation_date` is ignored.
pub fn process_at(bytes: &[u8], settings: &ProcessorSettings, today: Date) -> Result<Calendar> {
    let raw = raw::decode(bytes)?;
    Ok(process_holidays(&raw, settings, today))
}

/// Run the pipeline on already decoded records.
pub fn process_holidays(
    raw: &[RawHoliday],
    settings: &ProcessorSettings,
    today: Date,
) -> Calendar {
    let entries = parser::parse_holidays(raw, settings, today);
    let all = grouping::group_adjacent(entries, settings.adjacency, today);
    Calendar::new(all, today)
}
