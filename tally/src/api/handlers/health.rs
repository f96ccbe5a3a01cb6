use serde::Serialize;

use axum::Json;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Liveness message", body = MessageResponse),
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the Tally backend!".to_string(),
    })
}

/// `GET /api/hello`
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "health",
    responses(
        (status = 200, description = "Liveness message", body = MessageResponse),
    )
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}
