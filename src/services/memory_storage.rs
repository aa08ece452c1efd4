use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    application::{
        dto::file_store_dto::FileStoreDto,
        error::ApplicationError,
        services::{FileStoreFilter, StorageService},
    },
    domain::models::file::FileStoreData,
    services::error::StorageError,
};

/// Storage provider keeping everything in process memory. Used as the
/// default provider and in tests.
#[derive(Default)]
pub struct InMemoryStorageService {
    files: RwLock<HashMap<String, FileStoreData>>,
}

impl InMemoryStorageService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageService for InMemoryStorageService {
    async fn create(&self, dto: FileStoreDto) -> Result<String, ApplicationError> {
        let uuid = Uuid::new_v4().to_string();
        let data = FileStoreData {
            uuid: uuid.clone(),
            file_name: dto.file_name,
            content_type: dto.content_type,
            origin: dto.meta.origin,
            company_uuid: dto.meta.company_uuid,
            length: dto.content.len() as u64,
            created_at: Utc::now(),
            content: dto.content,
        };
        self.files.write().unwrap().insert(uuid.clone(), data);
        Ok(uuid)
    }

    async fn get_by_meta_uuid(&self, uuid: &str) -> Result<FileStoreData, ApplicationError> {
        self.files
            .read()
            .unwrap()
            .get(uuid)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(uuid.to_string()).into())
    }

    async fn get_by_meta_uuids(
        &self,
        uuids: &[String],
    ) -> Result<Vec<FileStoreData>, ApplicationError> {
        let files = self.files.read().unwrap();
        uuids
            .iter()
            .map(|uuid| {
                files
                    .get(uuid)
                    .cloned()
                    .ok_or_else(|| StorageError::NotFound(uuid.to_string()).into())
            })
            .collect()
    }

    async fn delete_by_meta_uuid(&self, uuid: &str) -> Result<(), ApplicationError> {
        self.files
            .write()
            .unwrap()
            .remove(uuid)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(uuid.to_string()).into())
    }

    async fn find(&self, filter: FileStoreFilter) -> Result<Vec<FileStoreData>, ApplicationError> {
        let files = self.files.read().unwrap();
        let mut matches: Vec<FileStoreData> = files
            .values()
            .filter(|data| {
                data.company_uuid.as_deref() == Some(filter.company_uuid.as_str())
                    && data.file_name == filter.file_name
                    && data.created_at >= filter.created_after
                    && data.origin == filter.origin
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.uuid.cmp(&b.uuid))
        });
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::{
        application::dto::file_store_dto::FileMetaDataDto, domain::models::file::FileOrigin,
    };

    fn dto(file_name: &str, company_uuid: &str, origin: FileOrigin) -> FileStoreDto {
        FileStoreDto {
            content: b"col_a,col_b".to_vec(),
            file_name: file_name.to_string(),
            content_type: Some("text/csv".to_string()),
            meta: FileMetaDataDto {
                company_uuid: Some(company_uuid.to_string()),
                origin,
            },
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let storage = InMemoryStorageService::new();
        let uuid = storage
            .create(dto("report.csv", "company-1", FileOrigin::ImportCsv))
            .await
            .unwrap();

        let stored = storage.get_by_meta_uuid(&uuid).await.unwrap();
        assert_eq!(stored.uuid, uuid);
        assert_eq!(stored.file_name, "report.csv");
        assert_eq!(stored.company_uuid, Some("company-1".to_string()));
        assert_eq!(stored.length, 11);
        assert_eq!(stored.content, b"col_a,col_b");
    }

    #[tokio::test]
    async fn get_unknown_uuid_is_not_found() {
        let storage = InMemoryStorageService::new();
        assert!(matches!(
            storage.get_by_meta_uuid("missing").await,
            Err(ApplicationError::NotFound)
        ));
    }

    #[tokio::test]
    async fn batch_get_follows_requested_order() {
        let storage = InMemoryStorageService::new();
        let first = storage
            .create(dto("a.csv", "company-1", FileOrigin::ImportCsv))
            .await
            .unwrap();
        let second = storage
            .create(dto("b.csv", "company-1", FileOrigin::ImportCsv))
            .await
            .unwrap();

        let stored = storage
            .get_by_meta_uuids(&[second.clone(), first.clone()])
            .await
            .unwrap();
        let uuids: Vec<_> = stored.iter().map(|data| data.uuid.clone()).collect();
        assert_eq!(uuids, vec![second, first]);
    }

    #[tokio::test]
    async fn batch_get_fails_on_any_missing_uuid() {
        let storage = InMemoryStorageService::new();
        let known = storage
            .create(dto("a.csv", "company-1", FileOrigin::ImportCsv))
            .await
            .unwrap();

        assert!(matches!(
            storage
                .get_by_meta_uuids(&[known, "missing".to_string()])
                .await,
            Err(ApplicationError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let storage = InMemoryStorageService::new();
        let uuid = storage
            .create(dto("a.csv", "company-1", FileOrigin::ImportCsv))
            .await
            .unwrap();

        storage.delete_by_meta_uuid(&uuid).await.unwrap();
        assert!(matches!(
            storage.get_by_meta_uuid(&uuid).await,
            Err(ApplicationError::NotFound)
        ));
        assert!(matches!(
            storage.delete_by_meta_uuid(&uuid).await,
            Err(ApplicationError::NotFound)
        ));
    }

    #[tokio::test]
    async fn find_filters_on_all_criteria() {
        let storage = InMemoryStorageService::new();
        let matching = storage
            .create(dto("report.csv", "company-1", FileOrigin::ImportCsv))
            .await
            .unwrap();
        storage
            .create(dto("other.csv", "company-1", FileOrigin::ImportCsv))
            .await
            .unwrap();
        storage
            .create(dto("report.csv", "company-2", FileOrigin::ImportCsv))
            .await
            .unwrap();
        storage
            .create(dto("report.csv", "company-1", FileOrigin::DirectUpload))
            .await
            .unwrap();

        let found = storage
            .find(FileStoreFilter {
                company_uuid: "company-1".to_string(),
                file_name: "report.csv".to_string(),
                created_after: Utc::now() - Duration::minutes(1),
                origin: FileOrigin::ImportCsv,
            })
            .await
            .unwrap();

        let uuids: Vec<_> = found.iter().map(|data| data.uuid.clone()).collect();
        assert_eq!(uuids, vec![matching]);
    }

    #[tokio::test]
    async fn find_excludes_records_before_the_bound() {
        let storage = InMemoryStorageService::new();
        storage
            .create(dto("report.csv", "company-1", FileOrigin::ImportCsv))
            .await
            .unwrap();

        let found = storage
            .find(FileStoreFilter {
                company_uuid: "company-1".to_string(),
                file_name: "report.csv".to_string(),
                created_after: Utc::now() + Duration::minutes(1),
                origin: FileOrigin::ImportCsv,
            })
            .await
            .unwrap();
        assert!(found.is_empty());
    }
}
