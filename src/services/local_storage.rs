use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use uuid::Uuid;

use crate::{
    application::{
        dto::file_store_dto::FileStoreDto,
        error::ApplicationError,
        services::{FileStoreFilter, StorageService},
    },
    domain::models::file::{FileOrigin, FileStoreData},
    services::error::StorageError,
};

const META_SUFFIX: &str = ".meta.json";

/// Metadata sidecar persisted next to each content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileMetaRecord {
    uuid: String,
    file_name: String,
    content_type: Option<String>,
    origin: FileOrigin,
    company_uuid: Option<String>,
    length: u64,
    created_at: DateTime<Utc>,
}

impl FileMetaRecord {
    fn matches(&self, filter: &FileStoreFilter) -> bool {
        self.company_uuid.as_deref() == Some(filter.company_uuid.as_str())
            && self.file_name == filter.file_name
            && self.created_at >= filter.created_after
            && self.origin == filter.origin
    }

    fn into_store_data(self, content: Vec<u8>) -> FileStoreData {
        FileStoreData {
            uuid: self.uuid,
            file_name: self.file_name,
            content_type: self.content_type,
            origin: self.origin,
            company_uuid: self.company_uuid,
            length: self.length,
            created_at: self.created_at,
            content,
        }
    }
}

/// Storage provider persisting content under `<data_dir>/<uuid>` with a JSON
/// metadata sidecar at `<data_dir>/<uuid>.meta.json`.
pub struct LocalStorageService {
    data_dir: PathBuf,
}

impl LocalStorageService {
    pub async fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).await?;
        Ok(Self { data_dir })
    }

    fn content_path(&self, uuid: &str) -> PathBuf {
        self.data_dir.join(uuid)
    }

    fn meta_path(&self, uuid: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}", uuid, META_SUFFIX))
    }

    async fn read_meta(&self, path: &Path, uuid: &str) -> Result<FileMetaRecord, StorageError> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(uuid.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| StorageError::CorruptMetadata(uuid.to_string(), e.to_string()))
    }

    async fn load(&self, uuid: &str) -> Result<FileStoreData, StorageError> {
        let meta = self.read_meta(&self.meta_path(uuid), uuid).await?;
        let content = match fs::read(self.content_path(uuid)).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(uuid.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(meta.into_store_data(content))
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn create(&self, dto: FileStoreDto) -> Result<String, ApplicationError> {
        let uuid = Uuid::new_v4().to_string();
        let meta = FileMetaRecord {
            uuid: uuid.clone(),
            file_name: dto.file_name,
            content_type: dto.content_type,
            origin: dto.meta.origin,
            company_uuid: dto.meta.company_uuid,
            length: dto.content.len() as u64,
            created_at: Utc::now(),
        };

        let meta_bytes = serde_json::to_vec(&meta)
            .map_err(|e| StorageError::InternalError(e.to_string()))?;
        fs::write(self.content_path(&uuid), &dto.content)
            .await
            .map_err(StorageError::from)?;
        fs::write(self.meta_path(&uuid), meta_bytes)
            .await
            .map_err(StorageError::from)?;

        Ok(uuid)
    }

    async fn get_by_meta_uuid(&self, uuid: &str) -> Result<FileStoreData, ApplicationError> {
        Ok(self.load(uuid).await?)
    }

    async fn get_by_meta_uuids(
        &self,
        uuids: &[String],
    ) -> Result<Vec<FileStoreData>, ApplicationError> {
        let mut stored = Vec::with_capacity(uuids.len());
        for uuid in uuids {
            stored.push(self.load(uuid).await?);
        }
        Ok(stored)
    }

    async fn delete_by_meta_uuid(&self, uuid: &str) -> Result<(), ApplicationError> {
        match fs::remove_file(self.meta_path(uuid)).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(uuid.to_string()).into())
            }
            Err(e) => return Err(StorageError::from(e).into()),
        }
        match fs::remove_file(self.content_path(uuid)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from(e).into()),
        }
    }

    async fn find(&self, filter: FileStoreFilter) -> Result<Vec<FileStoreData>, ApplicationError> {
        let mut entries = fs::read_dir(&self.data_dir)
            .await
            .map_err(StorageError::from)?;

        let mut matches = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(StorageError::from)? {
            let path = entry.path();
            let is_sidecar = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.ends_with(META_SUFFIX))
                .unwrap_or(false);
            if !is_sidecar {
                continue;
            }

            let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
            let uuid = file_name.trim_end_matches(META_SUFFIX).to_string();
            let meta = self.read_meta(&path, &uuid).await?;
            if meta.matches(&filter) {
                matches.push(self.load(&uuid).await?);
            }
        }

        matches.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.uuid.cmp(&b.uuid))
        });
        Ok(matches)
    }
}
