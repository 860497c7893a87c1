//! Statistics, linear trends, extreme-condition probabilities and histograms
//! for historic weather series at a location.
//!
//! The entry point is [`Analyzer`], which turns a series of
//! [`WeatherDataPoint`]s into a [`WeatherAnalysis`] record. The individual
//! computations are also exported as free functions.

mod analysis;
mod analyzer;
mod catalog;
mod error;
mod export;
mod history;
mod types;
mod utils;

pub use analyzer::*;
pub use catalog::*;
pub use error::WeatherAnalysisError;
pub use history::*;

pub use analysis::histogram::*;
pub use analysis::probability::*;
pub use analysis::statistics::*;
pub use analysis::trend::*;

pub use export::error::ExportError;
pub use export::{export_csv, export_json, export_to_path, ExportFormat, CSV_COLUMNS};

pub use types::analysis::*;
pub use types::data_point::*;
pub use types::date_range::*;
pub use types::location::*;
pub use types::weather_variable::*;
