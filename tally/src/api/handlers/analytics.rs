//! Aggregate statistics and templated insight handlers.

use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::error::Result;
use crate::models::{CategoryBreakdown, InsightRequest, InsightResponse, FEEDBACK_COLLECTION};
use crate::services::{insights, AnalyticsService};

/// `GET /api/analytics/summary`
#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    tag = "analytics",
    responses(
        (status = 200, description = "Ranked category breakdown with total"),
        (status = 500, description = "Storage not configured or aggregation failed"),
    )
)]
pub async fn analytics_summary(State(state): State<AppState>) -> Result<Json<CategoryBreakdown>> {
    let store = state.store()?;
    let breakdown = AnalyticsService::new(store)
        .summarize(FEEDBACK_COLLECTION)
        .await?;
    Ok(Json(breakdown))
}

/// `POST /api/analytics/insights`
///
/// Deterministic template fill over the submitted items; never touches
/// storage and never fails.
#[utoipa::path(
    post,
    path = "/api/analytics/insights",
    tag = "analytics",
    request_body = InsightRequest,
    responses(
        (status = 200, description = "Templated natural-language summary", body = InsightResponse),
    )
)]
pub async fn generate_insights(Json(req): Json<InsightRequest>) -> Json<InsightResponse> {
    Json(InsightResponse {
        summary: insights::summarize_items(&req.items, &req.scope),
    })
}
