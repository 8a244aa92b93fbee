use crate::error::AppError;
use crate::models::DistributionParams;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use basket_analytics::{OrderDistribution, PEAK_HOURS, order_distribution};

pub async fn get_order_distribution(
    State(state): State<AppState>,
    params: Result<Query<DistributionParams>, QueryRejection>,
) -> Result<Json<OrderDistribution>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let peak = PEAK_HOURS.validate(params.peak_hours.as_deref())?;

    let report = order_distribution(&state.table, peak)?;
    Ok(Json(report))
}
