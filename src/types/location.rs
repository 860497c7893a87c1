use serde::{Deserialize, Serialize};
use std::fmt;

/// A named geographical point an analysis was requested for.
///
/// Coordinates are validated by whoever picks the location (latitude in
/// [-90, 90], longitude in [-180, 180]); the engine only carries them along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees (positive for North).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East).
    pub longitude: f64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, name: &str) -> Self {
        Self {
            latitude,
            longitude,
            name: name.to_string(),
            country: None,
            state: None,
        }
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    /// Formats the coordinates with four decimals, e.g. `"52.5200, 13.4050"`.
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.state, &self.country) {
            (Some(state), Some(country)) => write!(f, "{}, {}, {}", self.name, state, country),
            (None, Some(country)) => write!(f, "{}, {}", self.name, country),
            (Some(state), None) => write!(f, "{}, {}", self.name, state),
            (None, None) => write!(f, "{}", self.name),
        }
    }
}
