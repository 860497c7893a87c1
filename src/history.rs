use crate::types::analysis::WeatherAnalysis;
use log::debug;
use std::collections::VecDeque;

/// Number of records an [`AnalysisHistory`] keeps unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// In-memory log of recent analyses, most recent first.
///
/// Recording beyond the capacity drops the oldest record. A capacity of 0
/// keeps nothing.
///
/// # Examples
///
/// ```
/// use weather_analysis::{assemble_analysis, AnalysisHistory, DateRange, Location, find_variable};
/// use chrono::Utc;
///
/// let variable = find_variable("wind_speed").unwrap();
/// let location = Location::new(52.52, 13.405, "Berlin");
/// let now = Utc::now();
///
/// let mut history = AnalysisHistory::with_capacity(2);
/// for _ in 0..3 {
///     let analysis = assemble_analysis(variable.clone(), location.clone(), DateRange::new(now, now), vec![]);
///     history.record(analysis);
/// }
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    records: VecDeque<WeatherAnalysis>,
    capacity: usize,
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Puts `analysis` in front and returns the record evicted to stay within
    /// capacity, if any.
    pub fn record(&mut self, analysis: WeatherAnalysis) -> Option<WeatherAnalysis> {
        if self.capacity == 0 {
            return Some(analysis);
        }
        self.records.push_front(analysis);
        if self.records.len() > self.capacity {
            let evicted = self.records.pop_back();
            if let Some(evicted) = &evicted {
                debug!("history full, dropped analysis {}", evicted.id());
            }
            return evicted;
        }
        None
    }

    pub fn latest(&self) -> Option<&WeatherAnalysis> {
        self.records.front()
    }

    pub fn find(&self, id: &str) -> Option<&WeatherAnalysis> {
        self.records.iter().find(|analysis| analysis.id() == id)
    }

    /// Records from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &WeatherAnalysis> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
