//! This module provides the main entry point of the crate, [`Analyzer`], which
//! assembles statistics, trend and probability blocks into a [`WeatherAnalysis`].

use crate::analysis::histogram::{BinBoundary, DEFAULT_BIN_COUNT};
use crate::analysis::probability::{estimate_condition_probability, ExtremeCondition};
use crate::analysis::statistics::try_statistics;
use crate::analysis::trend::{fit_points, trend_from_fit, RegressionAxis};
use crate::history::{AnalysisHistory, DEFAULT_HISTORY_CAPACITY};
use crate::types::analysis::{Diagnostic, Statistics, Trend, WeatherAnalysis};
use crate::types::data_point::WeatherDataPoint;
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::weather_variable::WeatherVariable;
use bon::{bon, Builder};
use chrono::{DateTime, Utc};
use log::{info, warn};
use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// Tunables of an [`Analyzer`].
///
/// # Examples
///
/// ```
/// use weather_analysis::{AnalysisOptions, BinBoundary, RegressionAxis};
///
/// let options = AnalysisOptions::builder()
///     .regression_axis(RegressionAxis::ElapsedDays)
///     .bin_count(20)
///     .build();
/// assert_eq!(options.bin_boundary, BinBoundary::InclusiveLast);
/// assert_eq!(options.history_capacity, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct AnalysisOptions {
    /// Independent variable of the trend regression.
    #[builder(default)]
    pub regression_axis: RegressionAxis,
    /// Number of bins for distribution views.
    #[builder(default = DEFAULT_BIN_COUNT)]
    pub bin_count: usize,
    /// Treatment of the series maximum when binning.
    #[builder(default)]
    pub bin_boundary: BinBoundary,
    /// Number of records kept by histories created through [`Analyzer::history`].
    #[builder(default = DEFAULT_HISTORY_CAPACITY)]
    pub history_capacity: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Turns a data-point series into a [`WeatherAnalysis`] record.
///
/// The analyzer holds no state besides its options: every call works on the
/// series it is handed and returns a new record.
///
/// # Examples
///
/// ```
/// use weather_analysis::{Analyzer, AnalysisStatus, DateRange, Location, TrendDirection, find_variable};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let variable = find_variable("precipitation").unwrap();
/// let location = Location::new(51.5074, -0.1278, "London").with_country("GB");
/// let start = Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap();
/// let range = DateRange::new(start, start + Duration::days(3));
/// let points = vec![
///     weather_analysis::WeatherDataPoint::new(start, 2.0, &variable, &location, "example"),
///     weather_analysis::WeatherDataPoint::new(start + Duration::days(1), 12.5, &variable, &location, "example"),
///     weather_analysis::WeatherDataPoint::new(start + Duration::days(2), 14.0, &variable, &location, "example"),
/// ];
///
/// let analysis = Analyzer::default()
///     .analyze()
///     .variable(variable)
///     .location(location)
///     .date_range(range)
///     .data_points(points)
///     .call();
///
/// assert_eq!(analysis.status(), AnalysisStatus::Completed);
/// assert_eq!(analysis.probability().unwrap().probability, 66.7);
/// assert_eq!(analysis.trend().unwrap().direction, TrendDirection::Increasing);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    options: AnalysisOptions,
}

#[bon]
impl Analyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// An empty history sized by [`AnalysisOptions::history_capacity`].
    pub fn history(&self) -> AnalysisHistory {
        AnalysisHistory::with_capacity(self.options.history_capacity)
    }

    /// Builder form of [`Analyzer::assemble`].
    ///
    /// Set `.variable()`, `.location()`, `.date_range()` and `.data_points()`,
    /// then finish with `.call()`.
    #[builder]
    pub fn analyze(
        &self,
        variable: WeatherVariable,
        location: Location,
        date_range: DateRange,
        data_points: Vec<WeatherDataPoint>,
    ) -> WeatherAnalysis {
        self.assemble(variable, location, date_range, data_points)
    }

    /// Computes statistics, the extreme-condition probability for the
    /// variable's category, and the trend, and packages them with the query.
    ///
    /// Never fails: an empty or degenerate series yields fallback blocks which
    /// are listed in [`WeatherAnalysis::diagnostics`]. The stored data points are
    /// sorted ascending by date (stable for equal dates). The status is always
    /// [`crate::AnalysisStatus::Completed`].
    pub fn assemble(
        &self,
        variable: WeatherVariable,
        location: Location,
        date_range: DateRange,
        mut data_points: Vec<WeatherDataPoint>,
    ) -> WeatherAnalysis {
        data_points.sort_by_key(|point| point.date);
        let mut diagnostics = Vec::new();

        let statistics = match try_statistics(&data_points) {
            Some(statistics) => statistics,
            None => {
                warn!("no data points for {} at {}", variable.id, location.name);
                diagnostics.push(Diagnostic::NoData);
                Statistics::default()
            }
        };

        let condition = ExtremeCondition::for_category(variable.category);
        if !condition.is_mapped() {
            warn!(
                "category {} has no extreme condition, falling back to threshold {}",
                variable.category,
                condition.threshold()
            );
            diagnostics.push(Diagnostic::UnmappedCondition);
        }
        let probability = estimate_condition_probability(&data_points, condition);

        let trend = match fit_points(&data_points, self.options.regression_axis) {
            Some(fit) => {
                if fit.r_squared.is_none() {
                    diagnostics.push(Diagnostic::ZeroVariance);
                }
                trend_from_fit(&fit)
            }
            None => {
                diagnostics.push(Diagnostic::InsufficientPoints);
                Trend::default()
            }
        };

        let created_at = Utc::now();
        let id = generate_analysis_id(created_at);
        info!(
            "assembled analysis {} for {} at {} over {} points",
            id,
            variable.id,
            location.name,
            data_points.len()
        );

        WeatherAnalysis::new(
            id,
            variable,
            location,
            date_range,
            data_points,
            statistics,
            Some(probability),
            Some(trend),
            created_at,
            diagnostics,
        )
    }
}

/// Assembles an analysis with default options, see [`Analyzer::assemble`].
pub fn assemble_analysis(
    variable: WeatherVariable,
    location: Location,
    date_range: DateRange,
    data_points: Vec<WeatherDataPoint>,
) -> WeatherAnalysis {
    Analyzer::default().assemble(variable, location, date_range, data_points)
}

/// `analysis_<unix millis>_<9 base-36 chars>`. Unique in practice, not guaranteed.
fn generate_analysis_id(created_at: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("analysis_{}_{}", created_at.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::statistics::compute_statistics;
    use crate::types::analysis::{AnalysisStatus, TrendDirection};
    use crate::types::weather_variable::VariableCategory;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    fn fixture(category: VariableCategory, values: &[f64]) -> (WeatherVariable, Location, DateRange, Vec<WeatherDataPoint>) {
        let variable = WeatherVariable::new("fixture", "Fixture Variable", "unit", category);
        let location = Location::new(35.6762, 139.6503, "Tokyo").with_country("JP");
        let start = Utc.with_ymd_and_hms(2019, 5, 1, 0, 0, 0).unwrap();
        let range = DateRange::new(start, start + Duration::days(values.len() as i64));
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                WeatherDataPoint::new(start + Duration::days(i as i64), value, &variable, &location, "fixture")
            })
            .collect();
        (variable, location, range, points)
    }

    #[test]
    fn test_assemble_populates_every_block() {
        let (variable, location, range, points) =
            fixture(VariableCategory::Temperature, &[24.0, 27.5, 31.0, 29.0, 33.0]);
        let analysis = assemble_analysis(variable.clone(), location.clone(), range.clone(), points);

        assert_eq!(analysis.status(), AnalysisStatus::Completed);
        assert_eq!(analysis.variable(), &variable);
        assert_eq!(analysis.location(), &location);
        assert_eq!(analysis.date_range(), &range);
        assert_eq!(analysis.data_points().len(), 5);
        assert_eq!(analysis.statistics().max, 33.0);
        assert_eq!(analysis.probability().unwrap().probability, 40.0);
        assert_eq!(analysis.trend().unwrap().direction, TrendDirection::Increasing);
        assert!(analysis.diagnostics().is_empty());
    }

    #[test]
    fn test_recomputing_statistics_from_record_is_identical() {
        let (variable, location, range, points) =
            fixture(VariableCategory::Wind, &[3.2, 11.4, 7.7, 10.0, 12.9, 4.4, 6.1]);
        let analysis = assemble_analysis(variable, location, range, points);
        assert_eq!(&compute_statistics(analysis.data_points()), analysis.statistics());
    }

    #[test]
    fn test_empty_series_is_degenerate_not_an_error() {
        let (variable, location, range, points) = fixture(VariableCategory::Precipitation, &[]);
        let analysis = assemble_analysis(variable, location, range, points);

        assert_eq!(analysis.statistics(), &Statistics::default());
        let probability = analysis.probability().unwrap();
        assert_eq!(probability.probability, 0.0);
        assert_eq!(probability.description, "No data available");
        assert_eq!(analysis.trend(), Some(&Trend::default()));
        assert!(analysis.has_diagnostic(Diagnostic::NoData));
        assert!(analysis.has_diagnostic(Diagnostic::InsufficientPoints));
        assert_eq!(analysis.status(), AnalysisStatus::Completed);
    }

    #[test]
    fn test_constant_series_is_flagged() {
        let (variable, location, range, points) = fixture(VariableCategory::Temperature, &[21.0; 6]);
        let analysis = assemble_analysis(variable, location, range, points);
        assert!(analysis.has_diagnostic(Diagnostic::ZeroVariance));
        assert_eq!(analysis.trend().unwrap().significance, 0.0);
    }

    #[test]
    fn test_constant_inexact_series_is_flagged() {
        let (variable, location, range, points) = fixture(VariableCategory::Temperature, &[21.7; 10]);
        let analysis = assemble_analysis(variable, location, range, points);
        assert!(analysis.has_diagnostic(Diagnostic::ZeroVariance));
        assert_eq!(analysis.trend(), Some(&Trend::default()));
    }

    #[test]
    fn test_unmapped_category_is_flagged() {
        let (variable, location, range, points) = fixture(VariableCategory::Cloud, &[0.0, 35.0, 80.0]);
        let analysis = assemble_analysis(variable, location, range, points);
        assert!(analysis.has_diagnostic(Diagnostic::UnmappedCondition));
        assert_eq!(analysis.probability().unwrap().condition, "Unknown condition");
        assert_eq!(analysis.probability().unwrap().probability, 66.7);
    }

    #[test]
    fn test_data_points_are_stored_date_ascending() {
        let (variable, location, range, mut points) =
            fixture(VariableCategory::Wind, &[1.0, 2.0, 3.0, 4.0]);
        points.reverse();
        let analysis = assemble_analysis(variable, location, range, points);
        assert_eq!(analysis.values(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(analysis.trend().unwrap().rate, 1.0);
    }

    #[test]
    fn test_regression_axis_option_is_used() {
        let (variable, location, range, mut points) =
            fixture(VariableCategory::Wind, &[0.0, 1.0, 2.0]);
        // third observation two days later than the index suggests
        points[2].date += Duration::days(2);
        points[2].value = 4.0;

        let analyzer = Analyzer::new(
            AnalysisOptions::builder()
                .regression_axis(RegressionAxis::ElapsedDays)
                .build(),
        );
        let analysis = analyzer.assemble(variable, location, range, points);
        assert_eq!(analysis.trend().unwrap().rate, 1.0);
    }

    #[test]
    fn test_builder_matches_assemble() {
        let (variable, location, range, points) =
            fixture(VariableCategory::Precipitation, &[0.0, 12.0, 3.0, 15.5]);
        let analyzer = Analyzer::default();
        let built = analyzer
            .analyze()
            .variable(variable.clone())
            .location(location.clone())
            .date_range(range.clone())
            .data_points(points.clone())
            .call();
        let assembled = analyzer.assemble(variable, location, range, points);

        assert_eq!(built.statistics(), assembled.statistics());
        assert_eq!(built.probability(), assembled.probability());
        assert_eq!(built.trend(), assembled.trend());
        assert_ne!(built.id(), assembled.id());
    }

    #[test]
    fn test_ids_have_expected_shape_and_differ() {
        let now = Utc::now();
        let ids: HashSet<String> = (0..50).map(|_| generate_analysis_id(now)).collect();
        assert_eq!(ids.len(), 50);

        for id in &ids {
            let parts: Vec<&str> = id.split('_').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], "analysis");
            assert_eq!(parts[1], now.timestamp_millis().to_string());
            assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
            assert!(parts[2].bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_with_status_returns_new_record() {
        let (variable, location, range, points) = fixture(VariableCategory::Humidity, &[50.0, 60.0]);
        let analysis = assemble_analysis(variable, location, range, points);
        let id = analysis.id().to_string();
        let failed = analysis.with_status(AnalysisStatus::Failed);
        assert_eq!(failed.status(), AnalysisStatus::Failed);
        assert_eq!(failed.id(), id);
    }
}
