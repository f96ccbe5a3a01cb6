use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/api/hello", get(handlers::health::hello))
        .route("/test", get(handlers::diagnostics::test_database))
        .route(
            "/api/feedback",
            get(handlers::feedback::list_feedback).post(handlers::feedback::create_feedback),
        )
        .route(
            "/api/analytics/summary",
            get(handlers::analytics::analytics_summary),
        )
        .route(
            "/api/analytics/insights",
            post(handlers::analytics::generate_insights),
        )
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
