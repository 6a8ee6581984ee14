//! Error types for report rendering and query parsing.

use thiserror::Error;

/// Failures surfaced while building or exporting a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// CSV export was requested for an empty dataset.
    #[error("No data available to export.")]
    Empty,
    /// The requested output format is not supported.
    #[error("unsupported report format `{0}`")]
    UnknownFormat(String),
    /// The requested history report kind is not recognised.
    #[error("unknown report type `{0}`")]
    UnknownKind(String),
    /// The requested semester is not recognised.
    #[error("unknown semester `{0}`")]
    UnknownSemester(String),
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
