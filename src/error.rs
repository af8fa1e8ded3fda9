use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Coarse classification of every failure the pipeline can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input file is not an `.xlsx` workbook.
    UnsupportedFormat,
    /// Workbook content does not match the expected sheet/column layout.
    Structure,
    /// Filesystem or image encoding failure.
    Io,
}

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    #[error("workbook {} has no sheet named '{sheet}'", path.display())]
    MissingSheet { path: PathBuf, sheet: String },

    #[error("sheet '{sheet}' has no header row")]
    MissingHeaderRow { sheet: String },

    #[error("sheet '{sheet}' has no column '{column}'")]
    MissingColumn { sheet: String, column: String },

    #[error("sheet '{sheet}', column '{column}', row {row}: '{value}' is not a number")]
    NonNumeric {
        sheet: String,
        column: String,
        row: usize,
        value: String,
    },

    #[error("invalid input pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write workbook {}: {source}", path.display())]
    WorkbookWrite {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}

impl ScatterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScatterError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            ScatterError::Workbook { .. }
            | ScatterError::MissingSheet { .. }
            | ScatterError::MissingHeaderRow { .. }
            | ScatterError::MissingColumn { .. }
            | ScatterError::NonNumeric { .. }
            | ScatterError::Pattern { .. } => ErrorKind::Structure,
            ScatterError::Io { .. }
            | ScatterError::WorkbookWrite { .. }
            | ScatterError::Render { .. } => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScatterError>;
