//! Chart Routes
//!
//! Recompute chart data for the current widget selection.
//!
//! - GET /api/v1/charts/success-pie?site=ALL
//! - GET /api/v1/charts/success-payload-scatter?site=ALL&low=0&high=10000

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::parse_site;
use crate::api::dto::{PieParams, ScatterParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chart::{PieFigure, ScatterFigure};
use crate::query::PayloadRange;

/// GET /api/v1/charts/success-pie
///
/// Success/failure counts for the selected site. An unknown site yields an
/// empty pie, not an error.
pub async fn success_pie(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PieParams>,
) -> ApiResult<Json<PieFigure>> {
    let selector = parse_site(params.site.as_deref())?;

    let aggregate = state.engine.aggregate_by_site(&selector);

    Ok(Json(PieFigure::success_by_site(&aggregate, &selector)))
}

/// GET /api/v1/charts/success-payload-scatter
///
/// Launches inside the payload range, optionally for one site. Missing bounds
/// default to the dataset's payload bounds, the slider's initial value. Bounds
/// are not clamped, but `NaN` is rejected since it compares false to every
/// payload.
pub async fn success_payload_scatter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterParams>,
) -> ApiResult<Json<ScatterFigure>> {
    let selector = parse_site(params.site.as_deref())?;

    let dataset = state.dataset();
    let range = PayloadRange::new(
        params.low.unwrap_or(dataset.min_payload()),
        params.high.unwrap_or(dataset.max_payload()),
    );
    if range.low.is_nan() || range.high.is_nan() {
        return Err(ApiError::Validation(
            "payload bounds must be numbers".to_string(),
        ));
    }

    let records = state.engine.select_by_payload_and_site(&selector, range);

    Ok(Json(ScatterFigure::payload_vs_outcome(&records)))
}
