use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    application::{dto::file_store_dto::FileStoreDto, error::ApplicationError},
    domain::models::file::{FileOrigin, FileStoreData},
};

/// Filtered lookup criteria for stored files.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStoreFilter {
    pub company_uuid: String,
    pub file_name: String,
    pub created_after: DateTime<Utc>,
    pub origin: FileOrigin,
}

/// Persistence collaborator of the storage facade.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Persists a new record and returns its generated uuid.
    async fn create(&self, dto: FileStoreDto) -> Result<String, ApplicationError>;

    async fn get_by_meta_uuid(&self, uuid: &str) -> Result<FileStoreData, ApplicationError>;

    /// Batch fetch. Callers preserve the order this returns.
    async fn get_by_meta_uuids(
        &self,
        uuids: &[String],
    ) -> Result<Vec<FileStoreData>, ApplicationError>;

    async fn delete_by_meta_uuid(&self, uuid: &str) -> Result<(), ApplicationError>;

    async fn find(&self, filter: FileStoreFilter) -> Result<Vec<FileStoreData>, ApplicationError>;
}
