//! Error type for workbook I/O.

/// Errors raised while writing or reading workbooks.
#[derive(Debug, thiserror::Error)]
pub enum XlsxError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook serialization failure.
    #[error("workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Workbook parsing failure.
    #[error("workbook read error: {0}")]
    Read(#[from] calamine::XlsxError),

    /// More rows than a worksheet can hold.
    #[error("{rows} rows exceed the worksheet limit of {max}")]
    TooManyRows { rows: usize, max: usize },

    /// The workbook does not have the expected structure.
    #[error("malformed workbook: {0}")]
    Malformed(String),
}
