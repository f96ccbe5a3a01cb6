use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

/// Label substituted for a missing category in the stored-side breakdown.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Ranked count-per-category summary over a collection.
///
/// Serializes as `{"total": N, "breakdown": {"<category>": count, ...}}` with
/// breakdown entries emitted in rank order (descending count). `total` always
/// equals the sum of the counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub total: u64,
    pub entries: Vec<CategoryCount>,
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct BreakdownMap<'a>(&'a [CategoryCount]);

        impl Serialize for BreakdownMap<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for entry in self.0 {
                    map.serialize_entry(&entry.category, &entry.count)?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("CategoryBreakdown", 2)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("breakdown", &BreakdownMap(&self.entries))?;
        state.end()
    }
}

/// One client-supplied item for insight generation. Only the category is
/// consulted; any other submitted fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InsightItem {
    #[serde(default)]
    pub category: Option<String>,
}

fn default_scope() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InsightRequest {
    #[serde(default)]
    pub items: Vec<InsightItem>,
    /// "week" or "all". Accepted but not yet applied to the output.
    #[serde(default = "default_scope")]
    pub scope: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InsightResponse {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn breakdown_serializes_in_rank_order() {
        let breakdown = CategoryBreakdown {
            total: 6,
            entries: vec![
                CategoryCount {
                    category: "tone".to_string(),
                    count: 3,
                },
                CategoryCount {
                    category: "accuracy".to_string(),
                    count: 2,
                },
                CategoryCount {
                    category: "Unknown".to_string(),
                    count: 1,
                },
            ],
        };
        // Serialize to a string so map ordering is observable on the wire.
        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(
            json,
            r#"{"total":6,"breakdown":{"tone":3,"accuracy":2,"Unknown":1}}"#
        );
    }

    #[test]
    fn empty_breakdown_serializes_as_empty_object() {
        let breakdown = CategoryBreakdown {
            total: 0,
            entries: vec![],
        };
        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(json, r#"{"total":0,"breakdown":{}}"#);
    }

    #[test]
    fn insight_request_defaults() {
        let req: InsightRequest = serde_json::from_str("{}").unwrap();
        assert!(req.items.is_empty());
        assert_eq!(req.scope, "all");
    }

    #[test]
    fn insight_item_tolerates_extra_fields_and_missing_category() {
        let item: InsightItem =
            serde_json::from_str(r#"{"question":"q","severity":"low"}"#).unwrap();
        assert!(item.category.is_none());
    }
}
