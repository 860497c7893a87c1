//! Extreme-condition probability estimation.
//!
//! Every variable category maps to one fixed condition with a threshold in the
//! variable's native unit. Adding a condition means adding a variant and its
//! rows in the match tables below; the estimation itself does not change.

use crate::types::analysis::Probability;
use crate::types::data_point::WeatherDataPoint;
use crate::types::weather_variable::VariableCategory;
use crate::utils::round_to;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description reported when there are no observations to count.
pub const NO_DATA_DESCRIPTION: &str = "No data available";

/// A named extreme condition with its exceedance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremeCondition {
    /// Temperature above 30 °C.
    HighTemperature,
    /// Daily rainfall above 10 mm.
    HeavyRain,
    /// Wind speed above 10 m/s.
    StrongWind,
    /// Fallback for categories without a condition: any value above 0 counts.
    Unknown,
}

impl ExtremeCondition {
    /// Selects the condition evaluated for a variable category.
    pub fn for_category(category: VariableCategory) -> Self {
        match category {
            VariableCategory::Temperature => ExtremeCondition::HighTemperature,
            VariableCategory::Precipitation => ExtremeCondition::HeavyRain,
            VariableCategory::Wind => ExtremeCondition::StrongWind,
            VariableCategory::Cloud | VariableCategory::Humidity | VariableCategory::Other => {
                ExtremeCondition::Unknown
            }
        }
    }

    /// Parses a condition key; unrecognised keys map to [`ExtremeCondition::Unknown`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "high_temp" => ExtremeCondition::HighTemperature,
            "heavy_rain" => ExtremeCondition::HeavyRain,
            "strong_wind" => ExtremeCondition::StrongWind,
            _ => ExtremeCondition::Unknown,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ExtremeCondition::HighTemperature => "high_temp",
            ExtremeCondition::HeavyRain => "heavy_rain",
            ExtremeCondition::StrongWind => "strong_wind",
            ExtremeCondition::Unknown => "unknown",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExtremeCondition::HighTemperature => "Temperature > 30°C",
            ExtremeCondition::HeavyRain => "Rainfall > 10mm",
            ExtremeCondition::StrongWind => "Wind Speed > 10 m/s",
            ExtremeCondition::Unknown => "Unknown condition",
        }
    }

    /// Values strictly greater than the threshold count as extreme.
    pub fn threshold(&self) -> f64 {
        match self {
            ExtremeCondition::HighTemperature => 30.0,
            ExtremeCondition::HeavyRain => 10.0,
            ExtremeCondition::StrongWind => 10.0,
            ExtremeCondition::Unknown => 0.0,
        }
    }

    pub fn is_mapped(&self) -> bool {
        *self != ExtremeCondition::Unknown
    }
}

impl fmt::Display for ExtremeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Estimates how often `points` exceed the extreme condition of `category`.
///
/// # Examples
///
/// ```
/// use weather_analysis::{estimate_probability, Location, VariableCategory, WeatherDataPoint, WeatherVariable};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let variable = WeatherVariable::new("temp_max", "Maximum Temperature", "°C", VariableCategory::Temperature);
/// let location = Location::new(41.39, 2.17, "Barcelona");
/// let start = Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap();
/// let points: Vec<_> = [28.0, 31.0, 33.5, 29.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &v)| WeatherDataPoint::new(start + Duration::days(i as i64), v, &variable, &location, "example"))
///     .collect();
///
/// let probability = estimate_probability(&points, VariableCategory::Temperature);
/// assert_eq!(probability.probability, 50.0);
/// assert_eq!(probability.condition, "Temperature > 30°C");
/// ```
pub fn estimate_probability(points: &[WeatherDataPoint], category: VariableCategory) -> Probability {
    estimate_condition_probability(points, ExtremeCondition::for_category(category))
}

/// Estimates how often `points` exceed `condition`'s threshold.
///
/// An empty series yields an empty condition, probability 0 and the
/// [`NO_DATA_DESCRIPTION`] text.
pub fn estimate_condition_probability(
    points: &[WeatherDataPoint],
    condition: ExtremeCondition,
) -> Probability {
    if points.is_empty() {
        warn!("no data points, cannot estimate probability of {}", condition.key());
        return Probability {
            condition: String::new(),
            probability: 0.0,
            description: NO_DATA_DESCRIPTION.to_string(),
        };
    }

    let total = points.len();
    let threshold = condition.threshold();
    let extreme = points.iter().filter(|point| point.value > threshold).count();
    let probability = round_to(extreme as f64 / total as f64 * 100.0, 1);

    debug!(
        "{} of {} values exceed {} ({})",
        extreme,
        total,
        threshold,
        condition.key()
    );

    Probability {
        condition: condition.name().to_string(),
        probability,
        description: format!(
            "Based on {} days of data, there is a {}% chance of {}",
            total,
            probability,
            condition.name().to_lowercase()
        ),
    }
}
