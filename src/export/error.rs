use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to build export table for analysis '{0}'")]
    TableBuild(String, #[source] PolarsError),

    #[error("Failed to write CSV for analysis '{0}'")]
    CsvWrite(String, #[source] PolarsError),

    #[error("Failed to serialize analysis '{0}' to JSON")]
    JsonSerialize(String, #[source] serde_json::Error),

    #[error("Failed to create export file '{0}'")]
    FileCreate(PathBuf, #[source] std::io::Error),

    #[error("Failed to flush export file '{0}'")]
    FileFlush(PathBuf, #[source] std::io::Error),
}
