use crate::types::location::Location;
use crate::types::weather_variable::WeatherVariable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped observation of a weather variable at a location.
///
/// Data points are produced by a data source and only read by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherDataPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
    pub unit: String,
    /// Display name of the variable the value belongs to.
    pub variable: String,
    pub location: Location,
    /// Where the value came from, e.g. `"MERRA-2"` or `"Sample Data"`.
    pub source: String,
    /// Optional quality score in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
}

impl WeatherDataPoint {
    /// Creates a point whose unit and variable name are taken from `variable`.
    pub fn new(
        date: DateTime<Utc>,
        value: f64,
        variable: &WeatherVariable,
        location: &Location,
        source: &str,
    ) -> Self {
        Self {
            date,
            value,
            unit: variable.unit.clone(),
            variable: variable.name.clone(),
            location: location.clone(),
            source: source.to_string(),
            quality: None,
        }
    }

    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = Some(quality);
        self
    }
}
