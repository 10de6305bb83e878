//! API Routes
//!
//! Route handlers organized by functionality.

pub mod charts;
pub mod dashboard;
pub mod dataset;
pub mod health;
pub mod stats;
pub mod widgets;

use crate::api::error::ApiResult;
use crate::query::SiteSelector;

/// Parse an optional `site` query parameter, defaulting to `ALL`
pub(crate) fn parse_site(site: Option<&str>) -> ApiResult<SiteSelector> {
    match site {
        None => Ok(SiteSelector::All),
        Some(value) => Ok(SiteSelector::parse(value)?),
    }
}
