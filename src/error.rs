use crate::export::error::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherAnalysisError {
    #[error("Cannot build a distribution from an empty series")]
    EmptySeries,

    #[error("Invalid bin count {0}, at least one bin is required")]
    InvalidBinCount(usize),

    #[error(transparent)]
    Export(#[from] ExportError),
}
