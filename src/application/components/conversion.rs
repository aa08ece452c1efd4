use crate::{
    application::{
        dto::file_store_dto::{FileMetaDataDto, FileStoreDto},
        models::storage::StoredFileInfo,
    },
    domain::models::file::{FileStoreData, FileUpload},
};

/// Maps between upload/store representations and external view models.
///
/// A seam of the facade: tests substitute recording fakes for it.
pub trait StorageConversion: Send + Sync {
    /// Builds the persistence DTO for an upload. The meta's company uuid is
    /// left unset; the facade stamps it.
    fn file_store_dto_from_upload(&self, upload: &FileUpload) -> FileStoreDto;

    fn file_info_from_store_data(&self, data: &FileStoreData) -> StoredFileInfo;

    /// Batch variant; preserves input order.
    fn file_infos_from_store_data(&self, data: &[FileStoreData]) -> Vec<StoredFileInfo>;
}

pub struct DefaultStorageConversion;

impl StorageConversion for DefaultStorageConversion {
    fn file_store_dto_from_upload(&self, upload: &FileUpload) -> FileStoreDto {
        FileStoreDto {
            content: upload.content.clone(),
            file_name: upload.file_name.clone(),
            content_type: upload.content_type.clone(),
            meta: FileMetaDataDto {
                company_uuid: None,
                origin: upload.origin,
            },
        }
    }

    fn file_info_from_store_data(&self, data: &FileStoreData) -> StoredFileInfo {
        StoredFileInfo {
            uuid: data.uuid.clone(),
            file_name: data.file_name.clone(),
            content_type: data.content_type.clone(),
            origin: data.origin,
            company_uuid: data.company_uuid.clone(),
            length: data.length,
            created_at: data.created_at,
        }
    }

    fn file_infos_from_store_data(&self, data: &[FileStoreData]) -> Vec<StoredFileInfo> {
        data.iter()
            .map(|entry| self.file_info_from_store_data(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::models::file::FileOrigin;

    fn store_data(uuid: &str) -> FileStoreData {
        FileStoreData {
            uuid: uuid.to_string(),
            file_name: "report.csv".to_string(),
            content_type: Some("text/csv".to_string()),
            origin: FileOrigin::ImportCsv,
            company_uuid: Some("company-1".to_string()),
            length: 2,
            created_at: Utc::now(),
            content: b"hi".to_vec(),
        }
    }

    #[test]
    fn dto_from_upload_leaves_company_unset() {
        let upload = FileUpload::new(
            b"hi".to_vec(),
            "report.csv".to_string(),
            Some("text/csv".to_string()),
            FileOrigin::ImportCsv,
        );
        let dto = DefaultStorageConversion.file_store_dto_from_upload(&upload);
        assert_eq!(dto.file_name, "report.csv");
        assert_eq!(dto.meta.origin, FileOrigin::ImportCsv);
        assert_eq!(dto.meta.company_uuid, None);
    }

    #[test]
    fn file_info_mirrors_record_metadata() {
        let data = store_data("uuid-1");
        let info = DefaultStorageConversion.file_info_from_store_data(&data);
        assert_eq!(info.uuid, "uuid-1");
        assert_eq!(info.length, 2);
        assert_eq!(info.company_uuid, Some("company-1".to_string()));
        assert_eq!(info.created_at, data.created_at);
    }

    #[test]
    fn batch_conversion_preserves_order() {
        let records = vec![store_data("first"), store_data("second")];
        let infos = DefaultStorageConversion.file_infos_from_store_data(&records);
        let uuids: Vec<_> = infos.iter().map(|info| info.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["first", "second"]);
    }
}
