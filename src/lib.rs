//! # Launch Dash
//!
//! Interactive dashboard over a static table of launch records: a launch-site
//! dropdown, a payload range slider, a success pie chart and a
//! payload/outcome scatter chart that update as the filters change.
//!
//! ## Modules
//!
//! - [`dataset`]: Load the launch table once into an immutable [`Dataset`]
//! - [`query`]: Pure chart queries and success-rate breakdowns
//! - [`chart`]: Serializable figure and widget descriptions
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launch_dash::dataset::Dataset;
//! use launch_dash::query::{PayloadRange, QueryEngine, SiteSelector};
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::load("spacex_launch_dash.csv")?);
//!     let engine = QueryEngine::new(dataset);
//!
//!     let totals = engine.aggregate_by_site(&SiteSelector::All);
//!     println!("{} successes, {} failures", totals.success, totals.failure);
//!
//!     let heavy = engine.select_by_payload_and_site(
//!         &SiteSelector::site("KSC LC-39A"),
//!         PayloadRange::new(5000.0, 10000.0),
//!     );
//!     println!("{} heavy launches from KSC LC-39A", heavy.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod query;

// Re-export top-level types for convenience
pub use dataset::{Dataset, LaunchRecord, LoadError, LoadResult, Outcome};

pub use query::{
    aggregate_by_site, select_by_payload_and_site, OutcomeRate, PayloadRange, QueryEngine,
    QueryError, SiteAggregate, SiteSelector,
};

pub use chart::{PieFigure, ScatterFigure, SiteOption, SliderSpec};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DatasetConfig, LoggingConfig};
