// Course recommendation handler
// Resolves configuration, parses the event, runs the scoring query and shapes the response.

use tracing::{info, instrument};

use crate::{
    config::ConfigProvider,
    db::{CourseStore, RecommendationQuery},
    error::{RecommendError, RecommendResult},
    models::{HandlerResponse, RecommendationEvent, RecommendationRequest, RecommendationsBody},
};

/// Serves ranked course recommendations for one invocation at a time.
///
/// Holds no per-request state; the store decides how connections are
/// acquired and released.
pub struct RecommendationHandler<C, S> {
    config: C,
    store: S,
}

impl<C, S> RecommendationHandler<C, S>
where
    C: ConfigProvider,
    S: CourseStore,
{
    pub fn new(config: C, store: S) -> Self {
        RecommendationHandler { config, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Core flow. The database URL is checked before the event is parsed or
    /// the store is touched.
    #[instrument(skip_all)]
    pub async fn recommend(&self, event: &RecommendationEvent) -> RecommendResult<RecommendationsBody> {
        let database_url = self
            .config
            .database_url()
            .ok_or(RecommendError::Configuration)?;

        let request = RecommendationRequest::from_event(event)?;
        info!(
            category = request.category.as_deref().unwrap_or("all"),
            limit = request.limit,
            "Fetching course recommendations"
        );

        let query = RecommendationQuery::from(&request);
        let courses = self.store.fetch_recommendations(&database_url, &query).await?;

        info!("Returning {} recommendations", courses.len());
        Ok(RecommendationsBody::new(courses))
    }

    /// Boundary entry point: never fails, every error becomes a 500 response.
    pub async fn handle(&self, event: RecommendationEvent) -> HandlerResponse {
        let outcome = self
            .recommend(&event)
            .await
            .and_then(|body| serde_json::to_string(&body).map_err(RecommendError::from));

        match outcome {
            Ok(body) => HandlerResponse::json(200, body),
            Err(err) => error_response(&err),
        }
    }
}

/// Translates a failure into the `{"error": ...}` response.
pub fn error_response(err: &RecommendError) -> HandlerResponse {
    err.log();

    let body = serde_json::to_string(&err.to_body())
        .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());

    HandlerResponse::json(err.status_code(), body)
}
