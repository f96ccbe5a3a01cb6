//! Feedback submission and listing handlers.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::Query;
use validator::Validate;

use crate::api::state::AppState;
use crate::error::{Result, TallyError};
use crate::models::{
    CreateFeedbackRequest, CreateFeedbackResponse, FeedbackRecord, FieldFilter, ListFeedbackQuery,
    FEEDBACK_COLLECTION,
};

const DEFAULT_LIMIT: u32 = 50;

/// `POST /api/feedback`
#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = "feedback",
    request_body = CreateFeedbackRequest,
    responses(
        (status = 200, description = "Record persisted", body = CreateFeedbackResponse),
        (status = 422, description = "Invalid submission"),
        (status = 500, description = "Storage not configured"),
    )
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(req): Json<CreateFeedbackRequest>,
) -> Result<Json<CreateFeedbackResponse>> {
    req.validate()
        .map_err(|e| TallyError::Validation(e.to_string()))?;

    let store = state.store()?;
    let body = serde_json::to_value(&req)?;
    let id = store.insert_document(FEEDBACK_COLLECTION, &body).await?;

    tracing::debug!(id = %id, category = %req.category, "Feedback record created");

    Ok(Json(CreateFeedbackResponse { id }))
}

/// `GET /api/feedback`
#[utoipa::path(
    get,
    path = "/api/feedback",
    tag = "feedback",
    params(ListFeedbackQuery),
    responses(
        (status = 200, description = "Matching records, most recent first", body = [FeedbackRecord]),
        (status = 500, description = "Storage not configured"),
    )
)]
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<ListFeedbackQuery>,
) -> Result<Json<Vec<FeedbackRecord>>> {
    let store = state.store()?;

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let filter = query
        .category
        .filter(|c| !c.is_empty())
        .map(|c| FieldFilter::equals("category", c));

    let docs = store
        .find_documents(FEEDBACK_COLLECTION, filter.as_ref(), limit)
        .await?;

    let records = docs
        .into_iter()
        .map(FeedbackRecord::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(Json(records))
}
