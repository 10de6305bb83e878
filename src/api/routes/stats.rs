//! Stats Routes
//!
//! Success-rate breakdowns over the whole dataset.
//!
//! - GET /api/v1/stats/sites
//! - GET /api/v1/stats/boosters
//! - GET /api/v1/stats/payload?bucket_kg=1000

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{BucketParams, RatesResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::{
    best_by_success_rate, most_successes, success_rate_by_booster,
    success_rate_by_payload_bucket, success_rate_by_site, worst_by_success_rate, OutcomeRate,
    PAYLOAD_SLIDER_STEP,
};

/// GET /api/v1/stats/sites
pub async fn by_site(State(state): State<Arc<AppState>>) -> Json<RatesResponse> {
    Json(rates_response("site", success_rate_by_site(state.dataset())))
}

/// GET /api/v1/stats/boosters
pub async fn by_booster(State(state): State<Arc<AppState>>) -> Json<RatesResponse> {
    Json(rates_response(
        "booster",
        success_rate_by_booster(state.dataset()),
    ))
}

/// GET /api/v1/stats/payload
pub async fn by_payload(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BucketParams>,
) -> ApiResult<Json<RatesResponse>> {
    let bucket_kg = params.bucket_kg.unwrap_or(PAYLOAD_SLIDER_STEP);
    let rates = success_rate_by_payload_bucket(state.dataset(), bucket_kg)?;

    Ok(Json(rates_response("payload", rates)))
}

fn rates_response(group_by: &str, rates: Vec<OutcomeRate>) -> RatesResponse {
    let key = |r: Option<&OutcomeRate>| r.map(|r| r.key.clone());

    RatesResponse {
        group_by: group_by.to_string(),
        highest_rate: key(best_by_success_rate(&rates)),
        lowest_rate: key(worst_by_success_rate(&rates)),
        most_successes: key(most_successes(&rates)),
        rates,
    }
}
