//! Dataset Routes
//!
//! - GET /api/v1/dataset - Summary of the loaded launch table

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::DatasetSummaryResponse;
use crate::api::state::AppState;
use crate::query::SiteSelector;

/// GET /api/v1/dataset
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummaryResponse> {
    let dataset = state.dataset();
    let totals = state.engine.aggregate_by_site(&SiteSelector::All);

    Json(DatasetSummaryResponse {
        source: state.source.clone(),
        loaded_at: state.loaded_at.to_rfc3339(),
        records: dataset.len(),
        launch_sites: dataset
            .launch_sites()
            .into_iter()
            .map(str::to_string)
            .collect(),
        min_payload_kg: dataset.min_payload(),
        max_payload_kg: dataset.max_payload(),
        successes: totals.success,
        failures: totals.failure,
    })
}
