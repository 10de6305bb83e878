//! Widget Routes
//!
//! - GET /api/v1/sites - Launch site dropdown options
//! - GET /api/v1/payload-slider - Payload range slider spec

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SiteOptionsResponse;
use crate::api::state::AppState;
use crate::chart::{site_options, SliderSpec};
use crate::query::ALL_SITES;

/// GET /api/v1/sites
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SiteOptionsResponse> {
    Json(SiteOptionsResponse {
        default: ALL_SITES.to_string(),
        options: site_options(state.dataset()),
    })
}

/// GET /api/v1/payload-slider
pub async fn payload_slider(State(state): State<Arc<AppState>>) -> Json<SliderSpec> {
    Json(SliderSpec::for_dataset(state.dataset()))
}
