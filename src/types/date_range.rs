//! Defines the `DateRange` an analysis covers, optionally tagged with a season.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// The requested time window of an analysis.
///
/// `start < end` is expected but not enforced; the engine never rejects a
/// range, it only stores it on the resulting record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(rename = "startDate")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endDate")]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub is_seasonal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            is_seasonal: false,
            season: None,
        }
    }

    /// Creates a range restricted to one season of the year.
    pub fn seasonal(start: DateTime<Utc>, end: DateTime<Utc>, season: Season) -> Self {
        Self {
            start,
            end,
            is_seasonal: true,
            season: Some(season),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Whole days between start and end; negative for inverted ranges.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
