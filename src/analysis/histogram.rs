//! Equal-width frequency binning for distribution charts.

use crate::error::WeatherAnalysisError;
use crate::types::data_point::WeatherDataPoint;
use crate::utils::min_max;
use log::debug;
use serde::{Deserialize, Serialize};

/// Number of bins used by distribution views unless configured otherwise.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// One `[min, max)` interval of a histogram and the number of values in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// How the upper edge of the last bin is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinBoundary {
    /// The last bin is closed at the series maximum, so every value is counted.
    #[default]
    InclusiveLast,
    /// Every bin is half-open, including the last. Values equal to the series
    /// maximum fall outside all bins and are not counted.
    HalfOpen,
}

/// Partitions `values` into `bin_count` equal-width bins spanning their range.
///
/// Bin `i` covers `[min + i * width, min + (i + 1) * width)` with
/// `width = (max - min) / bin_count`. Under [`BinBoundary::InclusiveLast`] the
/// last bin's upper edge is the exact series maximum and is inclusive.
///
/// A constant series has zero width: under `HalfOpen` every bin is empty, under
/// `InclusiveLast` the last bin holds all values.
///
/// # Errors
///
/// [`WeatherAnalysisError::EmptySeries`] for an empty slice and
/// [`WeatherAnalysisError::InvalidBinCount`] for `bin_count == 0`.
///
/// # Examples
///
/// ```
/// use weather_analysis::{bin_values, BinBoundary};
///
/// let values: Vec<f64> = (0..=10).map(f64::from).collect();
///
/// let bins = bin_values(&values, 10, BinBoundary::InclusiveLast)?;
/// assert_eq!(bins.len(), 10);
/// assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), 11);
///
/// let half_open = bin_values(&values, 10, BinBoundary::HalfOpen)?;
/// assert_eq!(half_open.iter().map(|bin| bin.count).sum::<usize>(), 10);
/// # Ok::<(), weather_analysis::WeatherAnalysisError>(())
/// ```
pub fn bin_values(
    values: &[f64],
    bin_count: usize,
    boundary: BinBoundary,
) -> Result<Vec<HistogramBin>, WeatherAnalysisError> {
    if bin_count == 0 {
        return Err(WeatherAnalysisError::InvalidBinCount(bin_count));
    }
    let (min, max) = min_max(values).ok_or(WeatherAnalysisError::EmptySeries)?;
    let width = (max - min) / bin_count as f64;

    let bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| {
            let bin_min = min + i as f64 * width;
            let is_last = i + 1 == bin_count;
            let (bin_max, count) = if is_last && boundary == BinBoundary::InclusiveLast {
                let count = values.iter().filter(|&&v| bin_min <= v && v <= max).count();
                (max, count)
            } else {
                let bin_max = min + (i + 1) as f64 * width;
                let count = values.iter().filter(|&&v| bin_min <= v && v < bin_max).count();
                (bin_max, count)
            };
            HistogramBin {
                min: bin_min,
                max: bin_max,
                count,
            }
        })
        .collect();

    debug!(
        "binned {} values into {} bins of width {:.4} ({:?})",
        values.len(),
        bin_count,
        width,
        boundary
    );

    Ok(bins)
}

/// Bins the values of `points`, see [`bin_values`].
pub fn bin_points(
    points: &[WeatherDataPoint],
    bin_count: usize,
    boundary: BinBoundary,
) -> Result<Vec<HistogramBin>, WeatherAnalysisError> {
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    bin_values(&values, bin_count, boundary)
}
