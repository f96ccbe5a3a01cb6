use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::TallyError;
use crate::models::StoredDocument;

/// Collection name feedback records are persisted under.
pub const FEEDBACK_COLLECTION: &str = "feedback";

fn default_severity() -> String {
    "medium".to_string()
}

/// A user-submitted critique of an assistant's question/response pair.
///
/// `id` and `created_at` are assigned by the storage layer at insert time;
/// records are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FeedbackRecord {
    pub id: String,
    pub question: String,
    pub response: String,
    pub improvement: String,
    pub category: String,
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<StoredDocument> for FeedbackRecord {
    type Error = TallyError;

    fn try_from(doc: StoredDocument) -> Result<Self, Self::Error> {
        let mut body = match doc.body {
            Value::Object(map) => map,
            other => {
                return Err(TallyError::Internal(format!(
                    "document {} has a non-object body: {other}",
                    doc.id
                )))
            }
        };
        body.insert("id".to_string(), Value::String(doc.id));
        body.insert("created_at".to_string(), serde_json::to_value(doc.created_at)?);
        Ok(serde_json::from_value(Value::Object(body))?)
    }
}

/// Create payload: the five user-settable fields.
///
/// Unknown fields are rejected at deserialization; empty required fields are
/// rejected by validation before anything reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateFeedbackRequest {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "response must not be empty"))]
    pub response: String,
    #[validate(length(min = 1, message = "improvement must not be empty"))]
    pub improvement: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    #[serde(default = "default_severity")]
    pub severity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFeedbackResponse {
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct ListFeedbackQuery {
    /// Maximum number of records to return. Defaults to 50.
    pub limit: Option<u32>,
    /// Exact, case-sensitive category filter.
    pub category: Option<String>,
}
