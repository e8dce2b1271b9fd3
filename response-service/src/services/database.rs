//! Database operations for the response service.
//!
//! All stored responses live in a single MongoDB collection; per-document
//! atomicity of the driver operations is the only concurrency control.

use crate::error::AppError;
use crate::models::ResponseRecord;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Client as MongoClient, Collection, Database, IndexModel,
};

#[derive(Clone)]
pub struct ResponseDb {
    client: MongoClient,
    db: Database,
}

impl ResponseDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_idx".to_string())
                    .build(),
            )
            .build();

        self.responses()
            .create_index(created_at_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create created_at index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn responses(&self) -> Collection<ResponseRecord> {
        self.db.collection("responses")
    }

    pub async fn insert_response(&self, record: &ResponseRecord) -> Result<(), AppError> {
        self.responses()
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert response: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    /// All stored responses in the store's natural order.
    pub async fn find_all_responses(&self) -> Result<Vec<ResponseRecord>, AppError> {
        let cursor = self.responses().find(None, None).await.map_err(|e| {
            tracing::error!("Failed to query responses: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        let records: Vec<ResponseRecord> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect responses: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(records)
    }

    pub async fn find_response(&self, id: &str) -> Result<Option<ResponseRecord>, AppError> {
        self.responses()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find response: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })
    }

    /// Apply the supplied fields to a stored response and return the updated
    /// record. Fields that are `None` are left untouched; with neither field
    /// supplied this degrades to a plain lookup (an empty `$set` is a
    /// MongoDB error).
    pub async fn update_response(
        &self,
        id: &str,
        prompt: Option<&str>,
        content: Option<&str>,
    ) -> Result<Option<ResponseRecord>, AppError> {
        let mut set = doc! {};
        if let Some(prompt) = prompt {
            set.insert("prompt", prompt);
        }
        if let Some(content) = content {
            set.insert("content", content);
        }

        if set.is_empty() {
            return self.find_response(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.responses()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set }, options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update response: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })
    }

    pub async fn delete_response(&self, id: &str) -> Result<bool, AppError> {
        let result = self
            .responses()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete response: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(result.deleted_count > 0)
    }
}
