//! Health-reporting diagnostic endpoint. Unlike the rest of the API this
//! handler never propagates an error: every failure is captured into the
//! response body as status text.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;

/// How many collection names the report lists at most.
const COLLECTION_LIMIT: u32 = 10;

/// Captured error text is cut off so driver internals stay short.
const ERROR_SNIPPET_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// `GET /test`
#[utoipa::path(
    get,
    path = "/test",
    tag = "health",
    responses(
        (status = 200, description = "Storage reachability and configuration report", body = DiagnosticsReport),
    )
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: presence(state.config.database.url.is_some()),
        database_name: presence(state.config.database.name.is_some()),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    let Some(store) = &state.store else {
        report.database = "not configured".to_string();
        return Json(report);
    };

    match store.ping().await {
        Ok(()) => {
            report.connection_status = "connected".to_string();
            match store.list_collections(COLLECTION_LIMIT).await {
                Ok(collections) => {
                    report.collections = collections;
                    report.database = "connected and working".to_string();
                }
                Err(e) => {
                    report.database =
                        format!("connected but error: {}", snippet(&e.to_string()));
                }
            }
        }
        Err(e) => {
            report.database = format!("error: {}", snippet(&e.to_string()));
        }
    }

    Json(report)
}

fn presence(set: bool) -> String {
    if set { "set" } else { "not set" }.to_string()
}

fn snippet(message: &str) -> String {
    message.chars().take(ERROR_SNIPPET_CHARS).collect()
}
