use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw document as it lives in the store: an opaque JSON body plus the
/// identifier and creation timestamp stamped by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Single-field equality filter applied by [`find_documents`].
///
/// [`find_documents`]: crate::db::DocumentStore::find_documents
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

impl FieldFilter {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// One group produced by a grouping pipeline. `key` is `None` when the
/// grouped field was absent or JSON null in the underlying documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: Option<String>,
    pub count: u64,
}
