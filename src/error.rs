use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Why a single page could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Failure to write the export file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// Errors that abort a collection run
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] FetchError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}
