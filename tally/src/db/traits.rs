use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FieldFilter, GroupCount, StoredDocument};

/// Insert/query/aggregate operations over named collections of JSON
/// documents. Handlers depend on `Arc<dyn DocumentStore>` so the backend can
/// be swapped without touching the API layer.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists `body` under `collection`, stamping a fresh id and creation
    /// timestamp. Returns the assigned id.
    async fn insert_document(&self, collection: &str, body: &serde_json::Value)
        -> Result<String>;

    /// Returns up to `limit` documents in `collection`, most recent first,
    /// optionally narrowed by a single-field equality filter.
    async fn find_documents(
        &self,
        collection: &str,
        filter: Option<&FieldFilter>,
        limit: u32,
    ) -> Result<Vec<StoredDocument>>;

    /// Groups documents in `collection` by a top-level body field and counts
    /// each group, sorted descending by count. Documents missing the field
    /// land in the `None` group.
    async fn group_count(&self, collection: &str, field: &str) -> Result<Vec<GroupCount>>;

    /// Distinct collection names present in the store, up to `limit`.
    async fn list_collections(&self, limit: u32) -> Result<Vec<String>>;

    /// Cheap reachability probe used by the diagnostic endpoint.
    async fn ping(&self) -> Result<()>;
}
