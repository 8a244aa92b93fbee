use crate::error::AppError;
use crate::models::TopCategoriesParams;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use basket_analytics::{CategoryRanking, LIMIT, top_categories};

pub async fn get_top_categories(
    State(state): State<AppState>,
    params: Result<Query<TopCategoriesParams>, QueryRejection>,
) -> Result<Json<CategoryRanking>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // Bounds are checked before touching the table
    let limit = LIMIT.validate(params.limit.as_deref())?;

    let ranking = top_categories(&state.table, limit)?;
    Ok(Json(ranking))
}
