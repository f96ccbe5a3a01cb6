use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tally API",
        version = "1.0.0",
        description = "Feedback collection and analytics backend for AI assistant critiques.",
    ),
    paths(
        handlers::health::root,
        handlers::health::hello,
        handlers::diagnostics::test_database,
        handlers::feedback::create_feedback,
        handlers::feedback::list_feedback,
        handlers::analytics::analytics_summary,
        handlers::analytics::generate_insights,
    ),
    components(schemas(
        // Feedback
        models::FeedbackRecord,
        models::CreateFeedbackRequest,
        models::CreateFeedbackResponse,
        // Analytics
        models::InsightItem,
        models::InsightRequest,
        models::InsightResponse,
        // Handler-local types
        handlers::health::MessageResponse,
        handlers::diagnostics::DiagnosticsReport,
    )),
    tags(
        (name = "health", description = "Liveness and diagnostics"),
        (name = "feedback", description = "Feedback record submission and listing"),
        (name = "analytics", description = "Aggregate statistics and templated insights"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
