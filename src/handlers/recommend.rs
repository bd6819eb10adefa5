// Recommendation handler
// Adapts HTTP requests onto the invocation event contract

use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};
use tracing::warn;

use crate::{
    config::ConfigProvider,
    db::CourseStore,
    models::{HandlerResponse, RecommendationEvent},
    recommend::RecommendationHandler,
};

/// Get ranked course recommendations
/// GET /recommend?category=<name>&limit=<n>
pub async fn recommend<C, S>(
    State(handler): State<Arc<RecommendationHandler<C, S>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response
where
    C: ConfigProvider + 'static,
    S: CourseStore + 'static,
{
    let event = RecommendationEvent::from_params(params);
    handler.handle(event).await.into_response()
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        for (name, value) in self.headers {
            match (HeaderName::try_from(name.as_str()), HeaderValue::try_from(value.as_str())) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!("Dropping invalid response header {:?}", name),
            }
        }

        response
    }
}
