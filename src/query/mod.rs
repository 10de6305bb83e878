//! Launch Query Engine
//!
//! Pure queries over the loaded launch table:
//!
//! - **selector**: `SiteSelector` (`ALL` or one site) and `PayloadRange`
//! - **engine**: `aggregate_by_site` and `select_by_payload_and_site`
//! - **stats**: success-rate breakdowns by site, payload bucket, booster
//!
//! # Example
//!
//! ```rust
//! use launch_dash::dataset::{Dataset, LaunchRecord, Outcome};
//! use launch_dash::query::{aggregate_by_site, select_by_payload_and_site, PayloadRange, SiteSelector};
//!
//! let dataset = Dataset::from_records(vec![
//!     LaunchRecord::new("siteA", 500.0, Outcome::Success, "FT"),
//!     LaunchRecord::new("siteA", 1500.0, Outcome::Failure, "v1.1"),
//!     LaunchRecord::new("siteB", 3000.0, Outcome::Success, "B4"),
//! ])
//! .unwrap();
//!
//! let all = aggregate_by_site(&dataset, &SiteSelector::All);
//! assert_eq!((all.success, all.failure), (2, 1));
//!
//! let points = select_by_payload_and_site(&dataset, &SiteSelector::All, PayloadRange::new(0.0, 2000.0));
//! assert_eq!(points.len(), 2);
//! ```

mod engine;
mod error;
mod selector;
mod stats;

pub use engine::{aggregate_by_site, select_by_payload_and_site, QueryEngine, SiteAggregate};
pub use error::{QueryError, QueryResult};
pub use selector::{
    PayloadRange, SiteSelector, ALL_SITES, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN,
    PAYLOAD_SLIDER_STEP,
};
pub use stats::{
    best_by_success_rate, most_successes, success_rate_by_booster, success_rate_by_payload_bucket,
    success_rate_by_site, worst_by_success_rate, OutcomeRate, MAX_PAYLOAD_BUCKETS,
};
