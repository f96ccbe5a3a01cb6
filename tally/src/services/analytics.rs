use std::sync::Arc;

use crate::db::DocumentStore;
use crate::error::{Result, TallyError};
use crate::models::{CategoryBreakdown, CategoryCount, UNKNOWN_CATEGORY};

/// Computes ranked category breakdowns from stored feedback.
pub struct AnalyticsService {
    store: Arc<dyn DocumentStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Groups every document in `collection` by its `category` field and
    /// returns descending counts. Documents without a category are reported
    /// under the literal label "Unknown"; should that collide with a stored
    /// "Unknown" label, the counts merge so `total` still equals the number
    /// of records in the collection.
    pub async fn summarize(&self, collection: &str) -> Result<CategoryBreakdown> {
        let groups = self
            .store
            .group_count(collection, "category")
            .await
            .map_err(|e| match e {
                TallyError::StorageUnavailable => TallyError::StorageUnavailable,
                other => TallyError::Aggregation(other.to_string()),
            })?;

        let mut entries: Vec<CategoryCount> = Vec::new();
        for group in groups {
            let category = group.key.unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
            match entries.iter_mut().find(|e| e.category == category) {
                Some(entry) => entry.count += group.count,
                None => entries.push(CategoryCount {
                    category,
                    count: group.count,
                }),
            }
        }
        // Re-rank after any merge; stable, so tied groups keep store order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        let total = entries.iter().map(|e| e.count).sum();

        Ok(CategoryBreakdown { total, entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::{Database, LibSqlBackend};
    use pretty_assertions::assert_eq;

    async fn memory_store() -> Arc<dyn DocumentStore> {
        let config = DatabaseConfig {
            url: Some(":memory:".to_string()),
            auth_token: None,
            name: None,
        };
        let db = Database::new(&config).await.unwrap();
        Arc::new(LibSqlBackend::new(db))
    }

    async fn insert_with_category(store: &Arc<dyn DocumentStore>, category: Option<&str>) {
        let mut body = serde_json::json!({
            "question": "q",
            "response": "r",
            "improvement": "i",
            "severity": "medium",
        });
        if let Some(category) = category {
            body["category"] = category.into();
        }
        store.insert_document("feedback", &body).await.unwrap();
    }

    #[tokio::test]
    async fn empty_collection_yields_empty_breakdown() {
        let store = memory_store().await;
        let breakdown = AnalyticsService::new(store).summarize("feedback").await.unwrap();
        assert_eq!(breakdown.total, 0);
        assert!(breakdown.entries.is_empty());
    }

    #[tokio::test]
    async fn counts_are_ranked_descending() {
        let store = memory_store().await;
        insert_with_category(&store, Some("tone")).await;
        insert_with_category(&store, Some("tone")).await;
        insert_with_category(&store, Some("accuracy")).await;

        let breakdown = AnalyticsService::new(store).summarize("feedback").await.unwrap();
        assert_eq!(breakdown.total, 3);
        assert_eq!(
            breakdown.entries,
            vec![
                CategoryCount {
                    category: "tone".to_string(),
                    count: 2
                },
                CategoryCount {
                    category: "accuracy".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn missing_category_becomes_unknown() {
        let store = memory_store().await;
        insert_with_category(&store, None).await;
        insert_with_category(&store, Some("tone")).await;

        let breakdown = AnalyticsService::new(store).summarize("feedback").await.unwrap();
        assert_eq!(breakdown.total, 2);
        assert!(breakdown
            .entries
            .iter()
            .any(|e| e.category == "Unknown" && e.count == 1));
    }

    #[tokio::test]
    async fn literal_unknown_merges_with_missing_category() {
        let store = memory_store().await;
        insert_with_category(&store, None).await;
        insert_with_category(&store, Some("Unknown")).await;
        insert_with_category(&store, Some("Unknown")).await;

        let breakdown = AnalyticsService::new(store).summarize("feedback").await.unwrap();
        assert_eq!(breakdown.total, 3);
        assert_eq!(
            breakdown.entries,
            vec![CategoryCount {
                category: "Unknown".to_string(),
                count: 3
            }]
        );
    }

    #[tokio::test]
    async fn total_equals_sum_of_counts() {
        let store = memory_store().await;
        for category in ["tone", "tone", "accuracy", "brevity", "brevity", "brevity"] {
            insert_with_category(&store, Some(category)).await;
        }

        let breakdown = AnalyticsService::new(store).summarize("feedback").await.unwrap();
        let sum: u64 = breakdown.entries.iter().map(|e| e.count).sum();
        assert_eq!(breakdown.total, sum);
        assert_eq!(breakdown.total, 6);
    }

    #[tokio::test]
    async fn other_collections_are_not_counted() {
        let store = memory_store().await;
        insert_with_category(&store, Some("tone")).await;
        store
            .insert_document("notes", &serde_json::json!({ "category": "tone" }))
            .await
            .unwrap();

        let breakdown = AnalyticsService::new(store).summarize("feedback").await.unwrap();
        assert_eq!(breakdown.total, 1);
    }
}
