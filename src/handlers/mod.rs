// Handlers module
// HTTP handlers exposing the recommendation function

pub mod recommend;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

use crate::{config::ConfigProvider, db::CourseStore, recommend::RecommendationHandler};

/// Health check handler
/// Returns "OK" with 200 status for monitoring purposes
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Create the Axum router with the recommendation and health endpoints
pub fn create_router<C, S>(handler: Arc<RecommendationHandler<C, S>>) -> Router
where
    C: ConfigProvider + 'static,
    S: CourseStore + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/recommend", get(recommend::recommend::<C, S>))
        .with_state(handler)
}
