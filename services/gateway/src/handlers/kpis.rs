use crate::error::AppError;
use crate::state::AppState;
use axum::{Json, extract::State};
use basket_analytics::{KpiSummary, summary};

pub async fn get_kpis(State(state): State<AppState>) -> Result<Json<KpiSummary>, AppError> {
    let kpis = summary(&state.table)?;
    Ok(Json(kpis))
}
