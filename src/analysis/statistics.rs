//! Descriptive statistics over a data-point series.

use crate::types::analysis::Statistics;
use crate::types::data_point::WeatherDataPoint;
use crate::utils::sorted_values;
use log::debug;

/// Computes the statistics block for `points`.
///
/// An empty series yields [`Statistics::default`] (all zeros); use
/// [`try_statistics`] to tell that case apart from a genuine zero series.
///
/// The percentiles are nearest-rank values at sorted index `floor(n * 0.25)`
/// and `floor(n * 0.75)`, not interpolated, so they are coarse for small `n`.
///
/// # Examples
///
/// ```
/// use weather_analysis::statistics_of_values;
///
/// let stats = statistics_of_values(&[10.0, 20.0, 30.0, 40.0]).unwrap();
/// assert_eq!(stats.mean, 25.0);
/// assert_eq!(stats.median, 25.0);
/// assert!((stats.standard_deviation - 11.180).abs() < 1e-3);
/// ```
pub fn compute_statistics(points: &[WeatherDataPoint]) -> Statistics {
    try_statistics(points).unwrap_or_default()
}

/// Like [`compute_statistics`] but returns `None` for an empty series.
pub fn try_statistics(points: &[WeatherDataPoint]) -> Option<Statistics> {
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    statistics_of_values(&values)
}

/// Computes statistics directly over raw values. `None` when `values` is empty.
pub fn statistics_of_values(values: &[f64]) -> Option<Statistics> {
    if values.is_empty() {
        return None;
    }

    let sorted = sorted_values(values);
    let n = sorted.len();
    let n_f = n as f64;

    let mean = sorted.iter().sum::<f64>() / n_f;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    let variance = sorted
        .iter()
        .map(|&value| (value - mean).powi(2))
        .sum::<f64>()
        / n_f;

    // floor(n * q) is always < n for q < 1
    let percentile25 = sorted[(n_f * 0.25).floor() as usize];
    let percentile75 = sorted[(n_f * 0.75).floor() as usize];

    debug!("computed statistics over {} values (mean {:.3})", n, mean);

    Some(Statistics {
        mean,
        median,
        min: sorted[0],
        max: sorted[n - 1],
        standard_deviation: variance.sqrt(),
        percentile25,
        percentile75,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::Location;
    use crate::types::weather_variable::{VariableCategory, WeatherVariable};
    use chrono::{Duration, TimeZone, Utc};

    fn points_from(values: &[f64]) -> Vec<WeatherDataPoint> {
        let variable = WeatherVariable::new("temp_avg", "Average Temperature", "°C", VariableCategory::Temperature);
        let location = Location::new(52.52, 13.405, "Berlin");
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                WeatherDataPoint::new(start + Duration::days(i as i64), value, &variable, &location, "test")
            })
            .collect()
    }

    #[test]
    fn test_empty_series_is_all_zero() {
        assert_eq!(compute_statistics(&[]), Statistics::default());
        assert!(try_statistics(&[]).is_none());
    }

    #[test]
    fn test_four_value_scenario() {
        let stats = compute_statistics(&points_from(&[40.0, 10.0, 30.0, 20.0]));
        assert_eq!(stats.mean, 25.0);
        assert_eq!(stats.median, 25.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 40.0);
        assert!((stats.standard_deviation - 125f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.percentile25, 20.0);
        assert_eq!(stats.percentile75, 40.0);
    }

    #[test]
    fn test_odd_count_median_is_central_value() {
        let stats = statistics_of_values(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(stats.median, 3.0);
        // nearest rank: sorted[floor(3 * 0.25)] and sorted[floor(3 * 0.75)]
        assert_eq!(stats.percentile25, 1.0);
        assert_eq!(stats.percentile75, 5.0);
    }

    #[test]
    fn test_nearest_rank_quartiles_of_five_values() {
        let stats = statistics_of_values(&[9.0, 1.0, 7.0, 3.0, 5.0]).unwrap();
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.percentile25, 3.0);
        assert_eq!(stats.percentile75, 7.0);
    }

    #[test]
    fn test_single_value() {
        let stats = statistics_of_values(&[7.5]).unwrap();
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.standard_deviation, 0.0);
        assert_eq!(stats.percentile25, 7.5);
        assert_eq!(stats.percentile75, 7.5);
    }

    #[test]
    fn test_order_statistics_are_monotonic() {
        let series: [&[f64]; 4] = [
            &[1.0, 2.0],
            &[3.0, -4.0, 8.0, 8.0, 0.0],
            &[12.0, 7.0, 1.0, 19.0, 4.0, 4.0, 6.0],
            &[-2.0, -9.0, -1.0, -5.0, -7.0, -3.0, -8.0, -4.0, -6.0, -10.0],
        ];
        for values in series {
            let stats = statistics_of_values(values).unwrap();
            assert!(stats.min <= stats.percentile25, "{values:?}");
            assert!(stats.percentile25 <= stats.median, "{values:?}");
            assert!(stats.median <= stats.percentile75, "{values:?}");
            assert!(stats.percentile75 <= stats.max, "{values:?}");
        }
    }
}
