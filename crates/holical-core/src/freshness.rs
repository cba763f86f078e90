//! Freshness policy for per-year holiday payloads.
//!
//! The processing core performs no I/O.  A host that caches the raw payload
//! it fetched for a given year asks [`CachePolicy`] whether that buffer may
//! still be reused, and under which file name it is stored.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Default maximum age of a cached payload: 24 hours.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Decides whether a previously fetched payload is still fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachePolicy {
    /// Maximum age, in seconds, after which a payload must be fetched again.
    pub max_age_secs: u64,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            max_age_secs: DEFAULT_MAX_AGE.as_secs(),
        }
    }
}

impl CachePolicy {
    /// Create a policy with the given maximum age.
    pub fn with_max_age(max_age: Duration) -> Self {
        Self {
            max_age_secs: max_age.as_secs(),
        }
    }

    /// Return the maximum age as a [`Duration`].
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }

    /// Return `true` if a payload fetched at `fetched_at` may be reused at
    /// `now`.
    ///
    /// A `fetched_at` later than `now` (clock skew, touched files) counts as
    /// fresh.
    pub fn is_fresh(&self, fetched_at: SystemTime, now: SystemTime) -> bool {
        match now.duration_since(fetched_at) {
            Ok(age) => age < self.max_age(),
            Err(_) => true,
        }
    }

    /// File name under which the payload for `year` is cached.
    pub fn cache_file_name(year: u16) -> String {
        format!("holidays_{year}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn default_is_one_day() {
        assert_eq!(CachePolicy::default().max_age(), Duration::from_secs(86_400));
    }

    #[test]
    fn boundary_is_stale() {
        let policy = CachePolicy::default();
        assert!(policy.is_fresh(at(0), at(86_399)));
        assert!(!policy.is_fresh(at(0), at(86_400)));
    }

    #[test]
    fn future_fetch_time_is_fresh() {
        let policy = CachePolicy::with_max_age(Duration::from_secs(10));
        assert!(policy.is_fresh(at(100), at(50)));
    }

    #[test]
    fn file_name_per_year() {
        assert_eq!(CachePolicy::cache_file_name(2025), "holidays_2025.json");
    }

    #[test]
    fn deserializes_with_defaults() {
        let policy: CachePolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, CachePolicy::default());
    }

    proptest! {
        #[test]
        fn fresh_iff_younger_than_max_age(
            start in 0u64..1_000_000,
            age in 0u64..200_000,
            max in 1u64..200_000,
        ) {
            let policy = CachePolicy::with_max_age(Duration::from_secs(max));
            prop_assert_eq!(policy.is_fresh(at(start), at(start + age)), age < max);
        }
    }
}
