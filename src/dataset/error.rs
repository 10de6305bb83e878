//! Dataset loader error types

use thiserror::Error;

/// Errors that can occur while loading the launch records table
#[derive(Error, Debug)]
pub enum LoadError {
    /// Source file missing or unreadable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not well-formed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row could not be converted into a launch record
    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    /// The table has a header but no data rows
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type alias for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::MissingColumn("class".to_string());
        assert_eq!(err.to_string(), "Missing required column: class");

        let err = LoadError::InvalidRow {
            line: 4,
            reason: "class must be 0 or 1, got 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid row at line 4: class must be 0 or 1, got 2"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let load_err: LoadError = io_err.into();
        assert!(matches!(load_err, LoadError::Io(_)));
    }
}
