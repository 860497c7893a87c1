//! The fixed set of variables that can be analysed, with their upstream
//! MERRA-2 identifiers.

use crate::types::weather_variable::{VariableCategory, WeatherVariable};

const DATASET: &str = "MERRA-2";

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    unit: &'static str,
    description: &'static str,
    category: VariableCategory,
    dataset_variable: &'static str,
}

const CATALOG: [CatalogEntry; 13] = [
    CatalogEntry {
        id: "temp_avg",
        name: "Average Temperature",
        unit: "°C",
        description: "Daily average temperature",
        category: VariableCategory::Temperature,
        dataset_variable: "T2M",
    },
    CatalogEntry {
        id: "temp_max",
        name: "Maximum Temperature",
        unit: "°C",
        description: "Daily maximum temperature",
        category: VariableCategory::Temperature,
        dataset_variable: "T2MMAX",
    },
    CatalogEntry {
        id: "temp_min",
        name: "Minimum Temperature",
        unit: "°C",
        description: "Daily minimum temperature",
        category: VariableCategory::Temperature,
        dataset_variable: "T2MMIN",
    },
    CatalogEntry {
        id: "heat_index",
        name: "Heat Index",
        unit: "°C",
        description: "Apparent temperature considering humidity",
        category: VariableCategory::Temperature,
        dataset_variable: "T2M",
    },
    CatalogEntry {
        id: "precipitation",
        name: "Precipitation",
        unit: "mm",
        description: "Daily total precipitation",
        category: VariableCategory::Precipitation,
        dataset_variable: "PRECTOT",
    },
    CatalogEntry {
        id: "snowfall",
        name: "Snowfall",
        unit: "mm",
        description: "Daily snowfall amount",
        category: VariableCategory::Precipitation,
        dataset_variable: "PRECSNO",
    },
    CatalogEntry {
        id: "snow_depth",
        name: "Snow Depth",
        unit: "cm",
        description: "Snow depth on ground",
        category: VariableCategory::Precipitation,
        dataset_variable: "SNODP",
    },
    CatalogEntry {
        id: "wind_speed",
        name: "Wind Speed",
        unit: "m/s",
        description: "Average wind speed at 10m height",
        category: VariableCategory::Wind,
        dataset_variable: "WS10M",
    },
    CatalogEntry {
        id: "wind_direction",
        name: "Wind Direction",
        unit: "degrees",
        description: "Wind direction at 10m height",
        category: VariableCategory::Wind,
        dataset_variable: "WD10M",
    },
    CatalogEntry {
        id: "cloud_cover",
        name: "Cloud Cover",
        unit: "%",
        description: "Total cloud cover percentage",
        category: VariableCategory::Cloud,
        dataset_variable: "CLDTOT",
    },
    CatalogEntry {
        id: "relative_humidity",
        name: "Relative Humidity",
        unit: "%",
        description: "Relative humidity at 2m height",
        category: VariableCategory::Humidity,
        dataset_variable: "RH2M",
    },
    CatalogEntry {
        id: "pressure",
        name: "Surface Pressure",
        unit: "hPa",
        description: "Surface atmospheric pressure",
        category: VariableCategory::Other,
        dataset_variable: "PS",
    },
    CatalogEntry {
        id: "dust_concentration",
        name: "Dust Concentration",
        unit: "μg/m³",
        description: "Surface dust concentration",
        category: VariableCategory::Other,
        dataset_variable: "DUSTTOT",
    },
];

impl CatalogEntry {
    fn to_variable(&self) -> WeatherVariable {
        WeatherVariable {
            id: self.id.to_string(),
            name: self.name.to_string(),
            unit: self.unit.to_string(),
            description: self.description.to_string(),
            category: self.category,
            dataset: Some(DATASET.to_string()),
            dataset_variable: Some(self.dataset_variable.to_string()),
        }
    }
}

/// Every variable that can be analysed, grouped by category in catalog order.
pub fn available_variables() -> Vec<WeatherVariable> {
    CATALOG.iter().map(CatalogEntry::to_variable).collect()
}

pub fn variables_by_category(category: VariableCategory) -> Vec<WeatherVariable> {
    CATALOG
        .iter()
        .filter(|entry| entry.category == category)
        .map(CatalogEntry::to_variable)
        .collect()
}

/// Looks a variable up by its id, e.g. `"temp_max"`.
pub fn find_variable(id: &str) -> Option<WeatherVariable> {
    CATALOG
        .iter()
        .find(|entry| entry.id == id)
        .map(CatalogEntry::to_variable)
}
