//! Query error types
//!
//! Under a valid selector the query operations never fail; these errors
//! cover inputs outside the documented contract.

use thiserror::Error;

/// Errors that can occur when building query inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Site selector is neither `ALL` nor a usable site name
    #[error("Invalid site selector: {0:?}")]
    InvalidSelector(String),

    /// Payload bucket width must be a positive, finite number of kilograms
    #[error("Invalid payload bucket width: {0}")]
    InvalidBucket(f64),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
