use crate::handlers::{categories, distribution, health, kpis};
use crate::state::AppState;
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/kpis", get(kpis::get_kpis))
        .route("/categories/top", get(categories::get_top_categories))
        .route(
            "/orders/distribution",
            get(distribution::get_order_distribution),
        )
        .fallback(health::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
