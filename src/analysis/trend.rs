//! Linear trend detection via ordinary least squares.

use crate::types::analysis::{Trend, TrendDirection};
use crate::types::data_point::WeatherDataPoint;
use crate::utils::round_to;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Slopes within `±TREND_NOISE_THRESHOLD` (native unit per regression step)
/// are reported as [`TrendDirection::Stable`].
pub const TREND_NOISE_THRESHOLD: f64 = 0.01;

/// The independent variable used when fitting a trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionAxis {
    /// Position in the date-sorted series (0, 1, ..., n-1). Irregular sampling
    /// intervals are treated as uniform; the rate is per sample.
    #[default]
    SequenceIndex,
    /// Fractional days elapsed since the first observation; the rate is per day.
    ElapsedDays,
}

/// Result of a closed-form least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination in `[0, 1]`, `None` when every `y` is
    /// identical.
    pub r_squared: Option<f64>,
}

/// Fits a least-squares line through `(xs[i], ys[i])`.
///
/// Returns `None` with fewer than two pairs or when all `x` coincide.
/// Slices of different length are truncated to the shorter one.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let n_f = n as f64;

    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();

    let denominator = n_f * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    // Compared exactly: the mean of a constant like 21.7 is off by an ulp,
    // which would leave a tiny nonzero total sum of squares.
    if ys.iter().all(|&y| y == ys[0]) {
        return Some(LinearFit {
            slope: 0.0,
            intercept: ys[0],
            r_squared: None,
        });
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n_f;

    let y_mean = sum_y / n_f;
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum();
    let ss_tot: f64 = ys.iter().map(|y| (y - y_mean).powi(2)).sum();

    let r_squared = if ss_tot == 0.0 {
        None
    } else {
        Some((1.0 - ss_res / ss_tot).clamp(0.0, 1.0))
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Detects the trend of `points` regressing over the sequence index.
///
/// Fewer than two points give a stable trend with zero rate and significance.
/// A constant series has an undefined R²; its significance is reported as 0.
///
/// # Examples
///
/// ```
/// use weather_analysis::{detect_trend_in_values, TrendDirection};
///
/// let values: Vec<f64> = (0..10).map(|x| 2.0 * x as f64 + 1.0).collect();
/// let trend = detect_trend_in_values(&values);
/// assert_eq!(trend.direction, TrendDirection::Increasing);
/// assert_eq!(trend.rate, 2.0);
/// assert_eq!(trend.significance, 1.0);
/// ```
pub fn detect_trend(points: &[WeatherDataPoint]) -> Trend {
    detect_trend_with(points, RegressionAxis::SequenceIndex)
}

/// Detects the trend of `points` along the given regression axis.
///
/// Points are ordered by date first; the input order does not matter.
pub fn detect_trend_with(points: &[WeatherDataPoint], axis: RegressionAxis) -> Trend {
    match fit_points(points, axis) {
        Some(fit) => trend_from_fit(&fit),
        None => Trend::default(),
    }
}

/// Trend of a plain value series, regressing over the index.
pub fn detect_trend_in_values(values: &[f64]) -> Trend {
    let xs: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
    match fit_line(&xs, values) {
        Some(fit) => trend_from_fit(&fit),
        None => Trend::default(),
    }
}

pub(crate) fn fit_points(points: &[WeatherDataPoint], axis: RegressionAxis) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&WeatherDataPoint> = points.iter().collect();
    sorted.sort_by_key(|point| point.date);

    let xs: Vec<f64> = match axis {
        RegressionAxis::SequenceIndex => (0..sorted.len()).map(|i| i as f64).collect(),
        RegressionAxis::ElapsedDays => {
            let first = sorted[0].date;
            sorted
                .iter()
                .map(|point| (point.date - first).num_seconds() as f64 / 86_400.0)
                .collect()
        }
    };
    let ys: Vec<f64> = sorted.iter().map(|point| point.value).collect();

    let fit = fit_line(&xs, &ys);
    if fit.is_none() {
        warn!(
            "cannot fit a trend over {} points along {:?}: all x values coincide",
            sorted.len(),
            axis
        );
    }
    fit
}

pub(crate) fn trend_from_fit(fit: &LinearFit) -> Trend {
    let direction = if fit.slope > TREND_NOISE_THRESHOLD {
        TrendDirection::Increasing
    } else if fit.slope < -TREND_NOISE_THRESHOLD {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    let significance = match fit.r_squared {
        Some(r_squared) => round_to(r_squared, 2),
        None => {
            warn!("series has zero variance, reporting trend significance as 0");
            0.0
        }
    };

    debug!(
        "fitted slope {:.5}, intercept {:.5}, direction {}",
        fit.slope, fit.intercept, direction
    );

    Trend {
        direction,
        rate: round_to(fit.slope, 3),
        significance,
    }
}
