use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{
    components::{StorageConversion, StorageValidation},
    error::ApplicationError,
    models::{
        request::{
            CheckImportAlreadyUploadedRequest, GetFileInfoByUuidListRequest,
            GetFileInfoByUuidRequest, LoadFileByUuidRequest, UploadFileRequest,
        },
        response::{
            CheckImportAlreadyUploadedResponse, GetFileInfoByUuidListResponse,
            GetFileInfoByUuidResponse, LoadFileByUuidResponse, ResultResponse,
            UploadFileResponse,
        },
        storage::FileLoadModel,
    },
    services::{FileStoreFilter, StorageService},
};
use crate::domain::models::file::FileOrigin;

/// Orchestrates upload, lookup and duplicate-import checks over the storage
/// collaborators.
///
/// Request-shape violations fail fast with [`ApplicationError::BadRequest`]
/// before any collaborator is invoked. Business-rule failures complete
/// normally and surface through the [`ResultResponse`] error map.
pub struct StorageFacade {
    storage: Arc<dyn StorageService>,
    conversion: Arc<dyn StorageConversion>,
    validation: Arc<dyn StorageValidation>,
}

impl StorageFacade {
    pub fn new(
        storage: Arc<dyn StorageService>,
        conversion: Arc<dyn StorageConversion>,
        validation: Arc<dyn StorageValidation>,
    ) -> Self {
        Self {
            storage,
            conversion,
            validation,
        }
    }

    /// Uploads a file: persist, re-fetch, validate, and either keep the
    /// record or delete it again when validation fails. A rejected upload
    /// never leaves a record behind.
    pub async fn upload(
        &self,
        request: UploadFileRequest,
    ) -> Result<ResultResponse<UploadFileResponse>, ApplicationError> {
        let request = request.validate()?;

        let mut dto = self.conversion.file_store_dto_from_upload(&request.upload);
        dto.meta.company_uuid = Some(request.company_uuid.clone());

        let uuid = self.storage.create(dto).await?;
        let stored = self.storage.get_by_meta_uuid(&uuid).await?;

        let errors = self
            .validation
            .validate_file_max_length(&stored, request.max_file_length);
        if !errors.is_empty() {
            warn!("Upload {} failed validation, rolling back", uuid);
            self.storage.delete_by_meta_uuid(&uuid).await?;
            return Ok(ResultResponse::with_errors(errors));
        }

        info!(
            "Stored file {} for company {}",
            uuid, request.company_uuid
        );
        let file_info = self.conversion.file_info_from_store_data(&stored);
        Ok(ResultResponse::new(UploadFileResponse { file_info }))
    }

    pub async fn get_file_info_by_uuid(
        &self,
        request: GetFileInfoByUuidRequest,
    ) -> Result<ResultResponse<GetFileInfoByUuidResponse>, ApplicationError> {
        let uuid = request.validate()?;

        let stored = self.storage.get_by_meta_uuid(&uuid).await?;
        let file_info = self.conversion.file_info_from_store_data(&stored);
        Ok(ResultResponse::new(GetFileInfoByUuidResponse { file_info }))
    }

    pub async fn get_file_info_by_uuids(
        &self,
        request: GetFileInfoByUuidListRequest,
    ) -> Result<ResultResponse<GetFileInfoByUuidListResponse>, ApplicationError> {
        let uuids = request.validate()?;

        let stored = self.storage.get_by_meta_uuids(&uuids).await?;
        let files_info = self.conversion.file_infos_from_store_data(&stored);
        Ok(ResultResponse::new(GetFileInfoByUuidListResponse {
            files_info,
        }))
    }

    pub async fn load_file_by_uuid(
        &self,
        request: LoadFileByUuidRequest,
    ) -> Result<ResultResponse<LoadFileByUuidResponse>, ApplicationError> {
        let uuid = request.validate()?;

        let stored = self.storage.get_by_meta_uuid(&uuid).await?;
        Ok(ResultResponse::new(LoadFileByUuidResponse {
            file: FileLoadModel::from(&stored),
        }))
    }

    /// Looks for earlier CSV imports matching company, file name and
    /// creation bound. No match is a success outcome with an empty list.
    pub async fn check_import_already_uploaded(
        &self,
        request: CheckImportAlreadyUploadedRequest,
    ) -> Result<ResultResponse<CheckImportAlreadyUploadedResponse>, ApplicationError> {
        let request = request.validate()?;

        let matches = self
            .storage
            .find(FileStoreFilter {
                company_uuid: request.company_uuid,
                file_name: request.file_name,
                created_after: request.created_after,
                origin: FileOrigin::ImportCsv,
            })
            .await?;

        let uuids = matches.into_iter().map(|data| data.uuid).collect();
        Ok(ResultResponse::new(CheckImportAlreadyUploadedResponse {
            uuids,
        }))
    }
}
