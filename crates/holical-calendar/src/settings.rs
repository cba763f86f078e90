//! Processing settings.
//!
//! [`ProcessorSettings`] carries the three exclusion filters, the adjacency
//! policy used to build long-holiday groups, and an optional evaluation
//! date.  When no evaluation date is set the wall clock is read once per
//! pipeline invocation.
//!
//! Settings deserialize from kebab-case keys (`skip-passed`,
//! `skip-weekends`, `skip-today`, `adjacency`, `evaluation-date`); missing
//! keys take their defaults.

use holical_core::errors::Result;
use holical_time::Date;
use serde::{Deserialize, Serialize};

/// How holidays are joined into runs before weekend expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjacencyPolicy {
    /// No grouping: every entry is isolated.
    Disabled,
    /// Only calendar-consecutive holidays form a run.  Each run is then
    /// extended across the weekend days bordering it.
    Direct,
    /// Holidays separated only by Saturday/Sunday also form one run, with
    /// the bridging weekend days spliced in.
    #[default]
    BridgeWeekends,
}

/// Filters and policies for one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProcessorSettings {
    /// Drop holidays dated before today.  A holiday dated today is kept.
    pub skip_passed: bool,
    /// Drop holidays falling on Saturday or Sunday.
    pub skip_weekends: bool,
    /// Drop the holiday dated exactly today.
    pub skip_today: bool,
    /// Grouping policy for long holidays.
    pub adjacency: AdjacencyPolicy,
    /// Fixed "today"; `None` reads the local wall clock.
    pub evaluation_date: Option<Date>,
}

impl ProcessorSettings {
    /// Set [`skip_passed`](Self::skip_passed).
    pub fn with_skip_passed(mut self, skip: bool) -> Self {
        self.skip_passed = skip;
        self
    }

    /// Set [`skip_weekends`](Self::skip_weekends).
    pub fn with_skip_weekends(mut self, skip: bool) -> Self {
        self.skip_weekends = skip;
        self
    }

    /// Set [`skip_today`](Self::skip_today).
    pub fn with_skip_today(mut self, skip: bool) -> Self {
        self.skip_today = skip;
        self
    }

    /// Set the adjacency policy.
    pub fn with_adjacency(mut self, adjacency: AdjacencyPolicy) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Pin the evaluation date.
    pub fn with_evaluation_date(mut self, date: Date) -> Self {
        self.evaluation_date = Some(date);
        self
    }

    /// The evaluation date, or the current local date if none is pinned.
    pub fn resolve_today(&self) -> Result<Date> {
        match self.evaluation_date {
            Some(date) => Ok(date),
            None => Date::today(),
        }
    }
}
