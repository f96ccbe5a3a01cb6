use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::DocumentRepository;
use crate::db::traits::DocumentStore;
use crate::error::Result;
use crate::models::{FieldFilter, GroupCount, StoredDocument};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for LibSqlBackend {
    async fn insert_document(
        &self,
        collection: &str,
        body: &serde_json::Value,
    ) -> Result<String> {
        let conn = self.db.connect()?;
        DocumentRepository::insert(&conn, collection, body).await
    }

    async fn find_documents(
        &self,
        collection: &str,
        filter: Option<&FieldFilter>,
        limit: u32,
    ) -> Result<Vec<StoredDocument>> {
        let conn = self.db.connect()?;
        DocumentRepository::find(&conn, collection, filter, limit).await
    }

    async fn group_count(&self, collection: &str, field: &str) -> Result<Vec<GroupCount>> {
        let conn = self.db.connect()?;
        DocumentRepository::group_count(&conn, collection, field).await
    }

    async fn list_collections(&self, limit: u32) -> Result<Vec<String>> {
        let conn = self.db.connect()?;
        DocumentRepository::list_collections(&conn, limit).await
    }

    async fn ping(&self) -> Result<()> {
        let conn = self.db.connect()?;
        conn.query("SELECT 1", ()).await?;
        Ok(())
    }
}
