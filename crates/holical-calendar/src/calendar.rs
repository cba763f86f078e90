//! The processed holiday calendar.
//!
//! A [`Calendar`] holds the sorted real holidays of one pipeline invocation
//! together with the evaluation date they were computed against, and the
//! `next` / `previous` entries relative to that date.

use holical_time::{Date, Month};
use serde::Serialize;

use crate::entry::{Entry, Group};

/// Result of a pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calendar {
    /// The evaluation date.
    pub today: Date,
    /// First holiday on or after `today`.
    pub next: Option<Entry>,
    /// Last holiday before `next` (before `today` when `next` is absent).
    pub previous: Option<Entry>,
    /// Real holidays, sorted ascending and unique by date.
    pub all: Vec<Entry>,
}

impl Calendar {
    /// Index `all`, which must be sorted by date, around `today`.
    pub fn new(all: Vec<Entry>, today: Date) -> Self {
        let index = all.partition_point(|e| e.date < today);
        let next = all.get(index).cloned();
        let previous = index.checked_sub(1).and_then(|i| all.get(i)).cloned();
        Self {
            today,
            next,
            previous,
            all,
        }
    }

    /// A calendar with no holidays.
    pub fn empty(today: Date) -> Self {
        Self::new(Vec::new(), today)
    }

    /// Return `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Days until the next holiday (`0` when it is today).
    pub fn days_until_next(&self) -> Option<i32> {
        self.next.as_ref().map(|e| e.days_until)
    }

    /// The holiday on `date`, if any.
    pub fn get(&self, date: Date) -> Option<&Entry> {
        self.all
            .binary_search_by_key(&date, |e| e.date)
            .ok()
            .map(|i| &self.all[i])
    }

    /// Return `true` if `date` is a (non-synthetic) holiday.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.get(date).is_some()
    }

    /// Holidays falling in `month`, in date order.
    pub fn holidays_in_month(&self, month: Month) -> Vec<&Entry> {
        self.all.iter().filter(|e| e.month == month.number()).collect()
    }

    /// Distinct long-holiday blocks in chronological order.
    pub fn long_holidays(&self) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();
        for group in self.all.iter().filter_map(Entry::group) {
            // Members of one block are contiguous in `all`.
            if groups.last().map_or(true, |last| !last.same_block(&group)) {
                groups.push(group);
            }
        }
        groups
    }

    /// Long-holiday blocks containing a holiday in `month`.
    pub fn long_holidays_in_month(&self, month: Month) -> Vec<Group> {
        self.long_holidays()
            .into_iter()
            .filter(|g| g.holidays().any(|e| e.month == month.number()))
            .collect()
    }

    /// The first long-holiday block starting on or after `today`.
    pub fn next_long_holiday(&self) -> Option<Group> {
        self.long_holidays().into_iter().find(|g| g.start() >= self.today)
    }
}
