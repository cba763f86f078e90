//! Adjacency grouping.
//!
//! Sorts the filtered entries, partitions them into runs of adjacent
//! holidays according to an [`AdjacencyPolicy`], extends every run across
//! the weekend days bordering it, and cross-links the members of each
//! resulting block through a shared [`Group`].
//!
//! Synthesized weekend entries exist only inside groups; the returned list
//! holds real holidays only, sorted and unique by date.

use std::collections::HashSet;
use std::ops::Range;

use holical_time::Date;
use tracing::{debug, trace};

use crate::entry::{Entry, Group};
use crate::settings::AdjacencyPolicy;

/// Sort `entries`, group adjacent holidays, and return the real holidays
/// with their groups attached.
pub fn group_adjacent(
    mut entries: Vec<Entry>,
    policy: AdjacencyPolicy,
    today: Date,
) -> Vec<Entry> {
    // Stable sort: on duplicate dates the first record wins.
    entries.sort_by_key(|e| e.date);
    let before = entries.len();
    entries.dedup_by_key(|e| e.date);
    if entries.len() != before {
        debug!(dropped = before - entries.len(), "collapsed duplicate holiday dates");
    }

    if policy == AdjacencyPolicy::Disabled {
        return entries;
    }

    let blocks: Vec<Vec<Entry>> = partition_runs(&entries, policy)
        .into_iter()
        .map(|run| expand_run(&entries, run, today))
        .collect();

    let mut seen = HashSet::with_capacity(entries.len());
    let mut all = Vec::with_capacity(entries.len());
    let mut linked = 0usize;
    for block in blocks {
        let group = Group::new(block.clone());
        linked += usize::from(group.is_some());
        for mut entry in block {
            if !seen.insert(entry.date) || entry.is_synthetic() {
                continue;
            }
            entry.set_group(group.clone());
            all.push(entry);
        }
    }
    debug!(holidays = all.len(), groups = linked, ?policy, "grouped holidays");
    all
}

/// Split sorted, unique entries into index ranges of adjacent holidays.
fn partition_runs(sorted: &[Entry], policy: AdjacencyPolicy) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=sorted.len() {
        let boundary = i == sorted.len() || !joins(sorted[i - 1].date, sorted[i].date, policy);
        if boundary {
            runs.push(start..i);
            start = i;
        }
    }
    runs
}

/// Whether a holiday on `next` extends a run ending on `prev`.
fn joins(prev: Date, next: Date, policy: AdjacencyPolicy) -> bool {
    match policy {
        AdjacencyPolicy::Disabled => false,
        AdjacencyPolicy::Direct => next - prev == 1,
        AdjacencyPolicy::BridgeWeekends => {
            let mut d = prev.succ();
            while let Some(day) = d.filter(|day| *day < next) {
                if !day.is_weekend() {
                    return false;
                }
                d = day.succ();
            }
            true
        }
    }
}

/// Surround `sorted[run]` with its bordering weekend days and fill weekend
/// gaps inside it.
///
/// The outward walks stop at a weekend day that is itself a holiday in
/// `sorted`, which only happens under [`AdjacencyPolicy::Direct`].
fn expand_run(sorted: &[Entry], run: Range<usize>, today: Date) -> Vec<Entry> {
    let is_holiday = |day: &Date| sorted.binary_search_by_key(day, |e| e.date).is_ok();
    let run = &sorted[run];
    let (Some(first), Some(last)) = (run.first(), run.last()) else {
        return Vec::new();
    };

    let mut block = Vec::with_capacity(run.len() + 4);
    let mut d = first.date.pred();
    while let Some(day) = d.filter(|day| day.is_weekend() && !is_holiday(day)) {
        block.push(Entry::weekend(day, today));
        d = day.pred();
    }
    block.reverse();

    for (i, holiday) in run.iter().enumerate() {
        block.push(holiday.clone());
        if let Some(next) = run.get(i + 1) {
            block.extend(weekends_between(holiday.date, next.date, today));
        }
    }

    let mut d = last.date.succ();
    while let Some(day) = d.filter(|day| day.is_weekend() && !is_holiday(day)) {
        block.push(Entry::weekend(day, today));
        d = day.succ();
    }

    trace!(
        start = %first.date.iso(),
        end = %last.date.iso(),
        holidays = run.len(),
        days = block.len(),
        "expanded run"
    );
    block
}

/// Weekend days strictly between `start` and `end`.
fn weekends_between(start: Date, end: Date, today: Date) -> Vec<Entry> {
    let mut weekends = Vec::new();
    let mut d = start.succ();
    while let Some(day) = d.filter(|day| *day < end) {
        if day.is_weekend() {
            weekends.push(Entry::weekend(day, today));
        }
        d = day.succ();
    }
    weekends
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holiday(y: u16, m: u8, d: u8) -> Entry {
        Entry::holiday(date(y, m, d), "inamovible", format!("{y}-{m}-{d}"), date(2025, 1, 1))
    }

    fn isos<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<String> {
        entries.into_iter().map(|e| e.date.iso()).collect()
    }

    #[test]
    fn bridge_joins_across_weekend_only() {
        // Fri 2 May -> Mon 5 May: bridged by Sat/Sun.
        assert!(joins(date(2025, 5, 2), date(2025, 5, 5), AdjacencyPolicy::BridgeWeekends));
        assert!(!joins(date(2025, 5, 2), date(2025, 5, 5), AdjacencyPolicy::Direct));
        // Thu 1 May -> Mon 5 May: Friday is a working day.
        assert!(!joins(date(2025, 5, 1), date(2025, 5, 5), AdjacencyPolicy::BridgeWeekends));
        assert!(joins(date(2025, 5, 1), date(2025, 5, 2), AdjacencyPolicy::Direct));
    }

    #[test]
    fn partition_respects_policy() {
        let sorted = vec![
            holiday(2025, 5, 1),
            holiday(2025, 5, 2),
            holiday(2025, 5, 5),
            holiday(2025, 5, 25),
        ];
        assert_eq!(partition_runs(&sorted, AdjacencyPolicy::BridgeWeekends), vec![0..3, 3..4]);
        assert_eq!(partition_runs(&sorted, AdjacencyPolicy::Direct), vec![0..2, 2..3, 3..4]);
        assert!(partition_runs(&[], AdjacencyPolicy::Direct).is_empty());
    }

    #[test]
    fn expansion_walks_both_directions() {
        // Mon 2025-03-03 and Tue 2025-03-04 (Carnival): preceded by a weekend.
        let run = [holiday(2025, 3, 3), holiday(2025, 3, 4)];
        let block = expand_run(&run, 0..2, date(2025, 1, 1));
        assert_eq!(isos(&block), ["2025-03-01", "2025-03-02", "2025-03-03", "2025-03-04"]);
        assert!(block[0].is_synthetic() && block[1].is_synthetic());
        assert_eq!(block[0].name, "Saturday");

        // Friday 2025-05-02: followed by a weekend.
        let block = expand_run(&[holiday(2025, 5, 2)], 0..1, date(2025, 1, 1));
        assert_eq!(isos(&block), ["2025-05-02", "2025-05-03", "2025-05-04"]);
    }

    #[test]
    fn weekend_holiday_extends_to_the_other_weekend_day() {
        // Saturday holiday: Friday stops the backward walk, Sunday is added.
        let block = expand_run(&[holiday(2025, 5, 3)], 0..1, date(2025, 1, 1));
        assert_eq!(isos(&block), ["2025-05-03", "2025-05-04"]);
    }

    #[test]
    fn bridged_run_splices_weekend() {
        let out = group_adjacent(
            vec![holiday(2025, 5, 5), holiday(2025, 5, 2)],
            AdjacencyPolicy::BridgeWeekends,
            date(2025, 1, 1),
        );
        assert_eq!(isos(&out), ["2025-05-02", "2025-05-05"]);
        let g = out[0].group().unwrap();
        assert_eq!(isos(&g), ["2025-05-02", "2025-05-03", "2025-05-04", "2025-05-05"]);
        assert!(g.same_block(&out[1].group().unwrap()));
        // The spliced weekend days link back to the same block.
        for member in &g {
            assert!(member.group().unwrap().same_block(&g));
        }
    }

    #[test]
    fn direct_policy_keeps_separate_blocks() {
        let out = group_adjacent(
            vec![holiday(2025, 5, 2), holiday(2025, 5, 5)],
            AdjacencyPolicy::Direct,
            date(2025, 1, 1),
        );
        let (a, b) = (out[0].group().unwrap(), out[1].group().unwrap());
        assert!(!a.same_block(&b));
        assert_eq!(isos(&a), ["2025-05-02", "2025-05-03", "2025-05-04"]);
        assert_eq!(isos(&b), ["2025-05-03", "2025-05-04", "2025-05-05"]);
    }

    #[test]
    fn direct_walk_stops_at_weekend_holiday() {
        // Saturday 3 May and Monday 5 May are both holidays.
        let out = group_adjacent(
            vec![holiday(2025, 5, 3), holiday(2025, 5, 5)],
            AdjacencyPolicy::Direct,
            date(2025, 1, 1),
        );
        assert_eq!(isos(&out[0].group().unwrap()), ["2025-05-03", "2025-05-04"]);
        assert_eq!(isos(&out[1].group().unwrap()), ["2025-05-04", "2025-05-05"]);

        let bridged = group_adjacent(
            vec![holiday(2025, 5, 3), holiday(2025, 5, 5)],
            AdjacencyPolicy::BridgeWeekends,
            date(2025, 1, 1),
        );
        assert_eq!(
            isos(&bridged[0].group().unwrap()),
            ["2025-05-03", "2025-05-04", "2025-05-05"]
        );
    }

    #[test]
    fn isolated_holiday_gets_no_group() {
        let out = group_adjacent(
            vec![holiday(2025, 5, 1)],
            AdjacencyPolicy::BridgeWeekends,
            date(2025, 1, 1),
        );
        assert_eq!(out.len(), 1);
        assert!(out[0].group().is_none());
    }

    #[test]
    fn duplicates_keep_first_record() {
        let mut second = holiday(2025, 5, 1);
        second.name = "duplicate".into();
        let out = group_adjacent(
            vec![holiday(2025, 5, 1), second],
            AdjacencyPolicy::Disabled,
            date(2025, 1, 1),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "2025-5-1");
    }

    #[test]
    fn disabled_policy_only_sorts() {
        let out = group_adjacent(
            vec![holiday(2025, 5, 5), holiday(2025, 5, 2)],
            AdjacencyPolicy::Disabled,
            date(2025, 1, 1),
        );
        assert_eq!(isos(&out), ["2025-05-02", "2025-05-05"]);
        assert!(out.iter().all(|e| e.group().is_none()));
    }
}
