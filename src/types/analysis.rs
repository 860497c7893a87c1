//! The output record of the engine, [`WeatherAnalysis`], and the blocks it is
//! composed of.

use crate::analysis::histogram::{bin_values, HistogramBin};
use crate::analyzer::AnalysisOptions;
use crate::error::WeatherAnalysisError;
use crate::types::data_point::WeatherDataPoint;
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::weather_variable::WeatherVariable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive statistics of a value series, in the unit of its data points.
///
/// `Default` is the all-zero block reported for an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (divides by `n`).
    pub standard_deviation: f64,
    /// Nearest-rank 25th percentile, see [`crate::compute_statistics`].
    pub percentile25: f64,
    /// Nearest-rank 75th percentile.
    pub percentile75: f64,
}

/// Share of observations exceeding the threshold of an extreme condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Probability {
    /// Condition name, e.g. `"Temperature > 30°C"`. Empty when there was no data.
    pub condition: String,
    /// Percentage in `[0, 100]`, rounded to one decimal.
    pub probability: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Increasing => write!(f, "increasing"),
            TrendDirection::Decreasing => write!(f, "decreasing"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Direction and rate of a fitted linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Slope per regression step, rounded to three decimals.
    pub rate: f64,
    /// Coefficient of determination (R²), rounded to two decimals.
    pub significance: f64,
}

impl Default for Trend {
    fn default() -> Self {
        Self {
            direction: TrendDirection::Stable,
            rate: 0.0,
            significance: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Completed,
    Processing,
    Failed,
}

/// Marks a block of a record that holds a fallback value instead of a
/// computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// The series was empty: statistics are zero and probability is 0.
    NoData,
    /// Fewer than two distinct regression positions: the trend is stable with
    /// zero rate.
    InsufficientPoints,
    /// All values were identical: R² is undefined and significance is 0.
    ZeroVariance,
    /// The category has no extreme condition: threshold 0 was used.
    UnmappedCondition,
}

/// A finished analysis of one variable at one location over one date range.
///
/// Records are built once by [`crate::Analyzer`] and never mutated afterwards;
/// changing the status yields a new record (see [`WeatherAnalysis::with_status`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAnalysis {
    id: String,
    variable: WeatherVariable,
    location: Location,
    date_range: DateRange,
    data_points: Vec<WeatherDataPoint>,
    statistics: Statistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    probability: Option<Probability>,
    #[serde(default, rename = "trends", skip_serializing_if = "Option::is_none")]
    trend: Option<Trend>,
    status: AnalysisStatus,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<Diagnostic>,
}

impl WeatherAnalysis {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: String,
        variable: WeatherVariable,
        location: Location,
        date_range: DateRange,
        data_points: Vec<WeatherDataPoint>,
        statistics: Statistics,
        probability: Option<Probability>,
        trend: Option<Trend>,
        created_at: DateTime<Utc>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            id,
            variable,
            location,
            date_range,
            data_points,
            statistics,
            probability,
            trend,
            status: AnalysisStatus::Completed,
            created_at,
            diagnostics,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn variable(&self) -> &WeatherVariable {
        &self.variable
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    /// The analysed observations, ascending by date.
    pub fn data_points(&self) -> &[WeatherDataPoint] {
        &self.data_points
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn probability(&self) -> Option<&Probability> {
        self.probability.as_ref()
    }

    pub fn trend(&self) -> Option<&Trend> {
        self.trend.as_ref()
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Fallbacks that were applied while assembling the record.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_diagnostic(&self, diagnostic: Diagnostic) -> bool {
        self.diagnostics.contains(&diagnostic)
    }

    /// Values of the data points in record order.
    pub fn values(&self) -> Vec<f64> {
        self.data_points.iter().map(|point| point.value).collect()
    }

    /// Returns a copy of this record carrying `status`.
    ///
    /// The assembler always reports [`AnalysisStatus::Completed`]; callers that
    /// track a surrounding workflow use this to mark a record as processing or
    /// failed.
    pub fn with_status(self, status: AnalysisStatus) -> Self {
        Self { status, ..self }
    }

    /// Bins the record's values for a frequency-distribution view.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherAnalysisError::EmptySeries`] when the record holds no
    /// data points and [`WeatherAnalysisError::InvalidBinCount`] when
    /// `options.bin_count` is 0.
    pub fn histogram(
        &self,
        options: &AnalysisOptions,
    ) -> Result<Vec<HistogramBin>, WeatherAnalysisError> {
        bin_values(&self.values(), options.bin_count, options.bin_boundary)
    }
}
