//! Record parser and filter.
//!
//! Converts raw records into [`Entry`] values and applies the exclusion
//! filters of [`ProcessorSettings`].  Records whose date does not parse are
//! dropped.  The output is in input order; sorting happens downstream.

use holical_time::Date;
use tracing::debug;

use crate::entry::Entry;
use crate::raw::RawHoliday;
use crate::settings::ProcessorSettings;

/// Parse `raw` into entries, dropping malformed and filtered records.
///
/// A date is malformed unless it is a strict `YYYY-MM-DD` between
/// [`Date::MIN`] (1900-01-01) and [`Date::MAX`] (2199-12-31); records
/// outside that range are dropped even when the text is well formed.
pub fn parse_holidays(
    raw: &[RawHoliday],
    settings: &ProcessorSettings,
    today: Date,
) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(raw.len());
    for record in raw {
        let date = match Date::parse_iso(&record.date) {
            Ok(date) => date,
            Err(e) => {
                debug!(
                    date = %record.date,
                    name = %record.name,
                    error = %e,
                    "dropping record with invalid date"
                );
                continue;
            }
        };
        if let Some(reason) = exclusion(date, settings, today) {
            debug!(date = %record.date, name = %record.name, reason, "holiday filtered out");
            continue;
        }
        entries.push(Entry::holiday(date, record.category.as_str(), record.name.as_str(), today));
    }
    entries
}

/// The filter that excludes `date`, if any.
fn exclusion(date: Date, settings: &ProcessorSettings, today: Date) -> Option<&'static str> {
    if settings.skip_today && date == today {
        return Some("skip-today");
    }
    if settings.skip_passed && date < today {
        return Some("skip-passed");
    }
    if settings.skip_weekends && date.is_weekend() {
        return Some("skip-weekends");
    }
    None
}
