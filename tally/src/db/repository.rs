use chrono::{DateTime, SecondsFormat, Utc};
use libsql::{params, Connection, Row};
use nanoid::nanoid;

use crate::error::{Result, TallyError};
use crate::models::{FieldFilter, GroupCount, StoredDocument};

pub struct DocumentRepository;

impl DocumentRepository {
    pub async fn insert(
        conn: &Connection,
        collection: &str,
        body: &serde_json::Value,
    ) -> Result<String> {
        let id = nanoid!();
        // Fixed-width RFC 3339 so the created_at ordering is stable under
        // plain text comparison.
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        conn.execute(
            r#"
            INSERT INTO documents (id, collection, body, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                id.clone(),
                collection.to_string(),
                serde_json::to_string(body)?,
                created_at,
            ],
        )
        .await?;

        Ok(id)
    }

    pub async fn find(
        conn: &Connection,
        collection: &str,
        filter: Option<&FieldFilter>,
        limit: u32,
    ) -> Result<Vec<StoredDocument>> {
        let mut rows = match filter {
            Some(filter) => {
                conn.query(
                    r#"
                    SELECT id, body, created_at FROM documents
                    WHERE collection = ?1 AND json_extract(body, ?2) = ?3
                    ORDER BY created_at DESC, rowid DESC
                    LIMIT ?4
                    "#,
                    params![
                        collection.to_string(),
                        json_path(&filter.field)?,
                        filter.value.clone(),
                        limit,
                    ],
                )
                .await?
            }
            None => {
                conn.query(
                    r#"
                    SELECT id, body, created_at FROM documents
                    WHERE collection = ?1
                    ORDER BY created_at DESC, rowid DESC
                    LIMIT ?2
                    "#,
                    params![collection.to_string(), limit],
                )
                .await?
            }
        };

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_document(&row)?);
        }
        Ok(results)
    }

    pub async fn group_count(
        conn: &Connection,
        collection: &str,
        field: &str,
    ) -> Result<Vec<GroupCount>> {
        let mut rows = conn
            .query(
                r#"
                SELECT json_extract(body, ?2) AS grp, COUNT(*) AS cnt
                FROM documents
                WHERE collection = ?1
                GROUP BY grp
                ORDER BY cnt DESC
                "#,
                params![collection.to_string(), json_path(field)?],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(GroupCount {
                key: row.get::<Option<String>>(0)?,
                count: row.get::<i64>(1)?.max(0) as u64,
            });
        }
        Ok(results)
    }

    pub async fn list_collections(conn: &Connection, limit: u32) -> Result<Vec<String>> {
        let mut rows = conn
            .query(
                "SELECT DISTINCT collection FROM documents ORDER BY collection LIMIT ?1",
                params![limit],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row.get::<String>(0)?);
        }
        Ok(results)
    }

    fn row_to_document(row: &Row) -> Result<StoredDocument> {
        Ok(StoredDocument {
            id: row.get(0)?,
            body: serde_json::from_str(&row.get::<String>(1)?)?,
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(2)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

/// Builds the `json_extract` path for a top-level field. The path is always
/// bound as a query parameter; rejecting non-identifier characters here keeps
/// malformed field names from ever reaching the store.
fn json_path(field: &str) -> Result<String> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(TallyError::Validation(format!(
            "invalid filter field: {field:?}"
        )));
    }
    Ok(format!("$.{field}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_path_accepts_identifiers() {
        assert_eq!(json_path("category").unwrap(), "$.category");
        assert_eq!(json_path("created_at").unwrap(), "$.created_at");
    }

    #[test]
    fn json_path_rejects_non_identifiers() {
        assert!(json_path("").is_err());
        assert!(json_path("a.b").is_err());
        assert!(json_path("x') OR 1=1 --").is_err());
    }
}
