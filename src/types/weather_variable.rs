//! Defines the `WeatherVariable` descriptor and the `VariableCategory` enum that
//! drives threshold selection during probability estimation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The broad family a [`WeatherVariable`] belongs to.
///
/// The category decides which extreme condition is evaluated for a variable
/// (see [`crate::ExtremeCondition::for_category`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    /// Air temperatures and derived indices, usually in °C.
    Temperature,
    /// Rainfall, snowfall and snow depth.
    Precipitation,
    /// Wind speed and direction.
    Wind,
    /// Cloud cover.
    Cloud,
    /// Relative humidity.
    Humidity,
    /// Anything else (pressure, dust, ...).
    Other,
}

impl VariableCategory {
    /// Every category, in catalog display order.
    pub const ALL: [VariableCategory; 6] = [
        VariableCategory::Temperature,
        VariableCategory::Precipitation,
        VariableCategory::Wind,
        VariableCategory::Cloud,
        VariableCategory::Humidity,
        VariableCategory::Other,
    ];

    /// The lowercase identifier used in serialized records (e.g. `"wind"`).
    pub fn id(&self) -> &'static str {
        match self {
            VariableCategory::Temperature => "temperature",
            VariableCategory::Precipitation => "precipitation",
            VariableCategory::Wind => "wind",
            VariableCategory::Cloud => "cloud",
            VariableCategory::Humidity => "humidity",
            VariableCategory::Other => "other",
        }
    }

    /// Human readable category name for picklists.
    pub fn display_name(&self) -> &'static str {
        match self {
            VariableCategory::Temperature => "Temperature",
            VariableCategory::Precipitation => "Precipitation",
            VariableCategory::Wind => "Wind",
            VariableCategory::Cloud => "Cloud Cover",
            VariableCategory::Humidity => "Humidity",
            VariableCategory::Other => "Other",
        }
    }
}

impl fmt::Display for VariableCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Describes a measured quantity: what it is called, its unit and its category.
///
/// Variables are immutable reference data, normally taken from the static
/// catalog returned by [`crate::available_variables`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherVariable {
    /// Stable identifier, e.g. `"temp_max"`.
    pub id: String,
    /// Display name, e.g. `"Maximum Temperature"`.
    pub name: String,
    /// Unit every data point of this variable is expressed in.
    pub unit: String,
    /// Short description for tooltips.
    #[serde(default)]
    pub description: String,
    pub category: VariableCategory,
    /// Upstream dataset the variable is sourced from (e.g. `"MERRA-2"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    /// Variable code inside the upstream dataset (e.g. `"T2MMAX"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_variable: Option<String>,
}

impl WeatherVariable {
    /// Creates a variable without upstream identifiers.
    pub fn new(id: &str, name: &str, unit: &str, category: VariableCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            unit: unit.to_string(),
            description: String::new(),
            category,
            dataset: None,
            dataset_variable: None,
        }
    }
}
