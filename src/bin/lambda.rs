use course_recommender::{
    config::EnvConfig,
    db::PgCourseStore,
    middleware::init_tracing,
    models::{HandlerResponse, RecommendationEvent},
    recommend::RecommendationHandler,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

type Handler = RecommendationHandler<EnvConfig, PgCourseStore>;

async fn function_handler(
    handler: &Handler,
    event: LambdaEvent<RecommendationEvent>,
) -> Result<HandlerResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling recommendation invocation");

    Ok(handler.handle(event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing()?;

    let handler = Handler::new(EnvConfig::new(), PgCourseStore::new());
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<RecommendationEvent>| async move {
        function_handler(handler, event).await
    }))
    .await
}
