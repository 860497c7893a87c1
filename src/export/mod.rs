//! Serialises a [`WeatherAnalysis`] for download: a flat CSV table of its data
//! points or the full record as JSON.

pub mod error;

use crate::export::error::ExportError;
use crate::types::analysis::WeatherAnalysis;
use log::info;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column headers of the CSV export, in order.
pub const CSV_COLUMNS: [&str; 5] = ["Date", "Value", "Unit", "Variable", "Location"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// File name offered for downloads, e.g. `weather-analysis.csv`.
    pub fn default_file_name(&self) -> String {
        format!("weather-analysis.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// One row per data point, in record order.
fn data_point_frame(analysis: &WeatherAnalysis) -> Result<DataFrame, ExportError> {
    let points = analysis.data_points();
    let dates: Vec<String> = points
        .iter()
        .map(|point| point.date.format("%Y-%m-%d").to_string())
        .collect();
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    let units: Vec<&str> = points.iter().map(|point| point.unit.as_str()).collect();
    let variables: Vec<&str> = points.iter().map(|point| point.variable.as_str()).collect();
    let locations: Vec<&str> = points
        .iter()
        .map(|point| point.location.name.as_str())
        .collect();

    df!(
        CSV_COLUMNS[0] => dates,
        CSV_COLUMNS[1] => values,
        CSV_COLUMNS[2] => units,
        CSV_COLUMNS[3] => variables,
        CSV_COLUMNS[4] => locations,
    )
    .map_err(|e| ExportError::TableBuild(analysis.id().to_string(), e))
}

/// Writes the data points of `analysis` as CSV with a header row.
///
/// Dates are written as `YYYY-MM-DD` and every cell is quoted.
pub fn export_csv<W: Write>(analysis: &WeatherAnalysis, writer: W) -> Result<(), ExportError> {
    let mut df = data_point_frame(analysis)?;
    CsvWriter::new(writer)
        .include_header(true)
        .with_quote_style(QuoteStyle::Always)
        .finish(&mut df)
        .map_err(|e| ExportError::CsvWrite(analysis.id().to_string(), e))
}

/// Writes the whole record as pretty-printed JSON.
pub fn export_json<W: Write>(analysis: &WeatherAnalysis, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, analysis)
        .map_err(|e| ExportError::JsonSerialize(analysis.id().to_string(), e))
}

/// Creates (or truncates) `path` and exports `analysis` into it.
pub fn export_to_path(
    analysis: &WeatherAnalysis,
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ExportError::FileCreate(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_csv(analysis, &mut writer)?,
        ExportFormat::Json => export_json(analysis, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ExportError::FileFlush(path.to_path_buf(), e))?;

    info!(
        "exported analysis {} as {} to {}",
        analysis.id(),
        format,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::assemble_analysis;
    use crate::types::data_point::WeatherDataPoint;
    use crate::types::date_range::DateRange;
    use crate::types::location::Location;
    use crate::types::weather_variable::{VariableCategory, WeatherVariable};
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::tempdir;

    fn sample_analysis() -> WeatherAnalysis {
        let variable = WeatherVariable::new(
            "precipitation",
            "Precipitation",
            "mm",
            VariableCategory::Precipitation,
        );
        let location = Location::new(-33.8688, 151.2093, "Sydney").with_country("AU");
        let start = Utc.with_ymd_and_hms(2022, 2, 1, 6, 30, 0).unwrap();
        let points = [4.5, 18.0, 0.0]
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                WeatherDataPoint::new(start + Duration::days(i as i64), value, &variable, &location, "test")
            })
            .collect();
        assemble_analysis(variable, location, DateRange::new(start, start + Duration::days(3)), points)
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_point() -> Result<(), ExportError> {
        let analysis = sample_analysis();
        let mut buffer = Vec::new();
        export_csv(&analysis, &mut buffer)?;

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].replace('"', ""), CSV_COLUMNS.join(","));
        assert!(lines[1].starts_with("\"2022-02-01\","));
        assert!(lines[2].starts_with("\"2022-02-02\","));
        assert!(lines[1].contains("\"mm\""));
        assert!(lines[1].contains("\"Precipitation\""));
        assert!(lines[1].ends_with("\"Sydney\""));
        Ok(())
    }

    #[test]
    fn test_csv_of_empty_analysis_is_header_only() -> Result<(), ExportError> {
        let variable = WeatherVariable::new("snowfall", "Snowfall", "mm", VariableCategory::Precipitation);
        let location = Location::new(0.0, 0.0, "Null Island");
        let now = Utc::now();
        let analysis = assemble_analysis(variable, location, DateRange::new(now, now), Vec::new());

        let mut buffer = Vec::new();
        export_csv(&analysis, &mut buffer)?;
        let text = String::from_utf8(buffer).unwrap();
        let quoted_header = CSV_COLUMNS.map(|column| format!("\"{column}\"")).join(",");
        assert_eq!(text.lines().collect::<Vec<_>>(), vec![quoted_header.as_str()]);
        Ok(())
    }

    #[test]
    fn test_json_round_trips_record() -> Result<(), Box<dyn std::error::Error>> {
        let analysis = sample_analysis();
        let mut buffer = Vec::new();
        export_json(&analysis, &mut buffer)?;

        let text = String::from_utf8(buffer)?;
        assert!(text.contains("\n  \"id\""));
        assert!(text.contains("\"dataPoints\""));
        assert!(text.contains("\"trends\""));

        let parsed: WeatherAnalysis = serde_json::from_str(&text)?;
        assert_eq!(parsed.id(), analysis.id());
        assert_eq!(parsed.values(), analysis.values());
        assert_eq!(parsed.trend(), analysis.trend());
        assert_eq!(parsed.status(), analysis.status());
        Ok(())
    }

    #[test]
    fn test_export_to_path() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let analysis = sample_analysis();

        for format in [ExportFormat::Csv, ExportFormat::Json] {
            let path = dir.path().join(format.default_file_name());
            export_to_path(&analysis, &path, format)?;
            let written = std::fs::read_to_string(&path)?;
            assert!(written.contains("Sydney"));
        }
        Ok(())
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let result = export_to_path(&sample_analysis(), &path, ExportFormat::Csv);
        assert!(matches!(result, Err(ExportError::FileCreate(p, _)) if p == path));
    }
}
