//! Launch Dataset
//!
//! Loads the launch records table once at startup and exposes it as an
//! immutable value:
//!
//! - **types**: `Outcome`, `LaunchRecord`, `Dataset`
//! - **loader**: CSV parsing and schema validation
//! - **error**: `LoadError`
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_dash::dataset::Dataset;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load("spacex_launch_dash.csv")?;
//!     println!(
//!         "{} launches, payload {}..{} kg",
//!         dataset.len(),
//!         dataset.min_payload(),
//!         dataset.max_payload()
//!     );
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use loader::REQUIRED_COLUMNS;
pub use types::{Dataset, LaunchRecord, Outcome};
