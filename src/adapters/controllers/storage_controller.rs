use axum::{
    body::Body,
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use tracing::{info, warn};

use crate::{
    adapters::{dto::storage_dto::CheckImportQuery, state::AppState},
    application::{
        error::ApplicationError,
        models::{
            request::{
                GetFileInfoByUuidListRequest, GetFileInfoByUuidRequest, LoadFileByUuidRequest,
                UploadFileRequest,
            },
            response::{
                CheckImportAlreadyUploadedResponse, GetFileInfoByUuidListResponse,
                GetFileInfoByUuidResponse, ResultResponse, UploadFileResponse,
            },
            storage::FileUploadModel,
        },
    },
    domain::models::file::FileOrigin,
};

pub struct StorageController;

impl StorageController {
    /// POST /api/v1/files
    ///
    /// Multipart fields: file, fileName, contentType, origin, companyUuid,
    /// maxFileLength. Presence of required fields is the facade's concern;
    /// this handler only assembles the request.
    pub async fn upload_file(
        State(app_state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Json<ResultResponse<UploadFileResponse>>, ApplicationError> {
        let mut content: Option<Vec<u8>> = None;
        let mut file_name: Option<String> = None;
        let mut content_type: Option<String> = None;
        let mut origin: Option<FileOrigin> = None;
        let mut company_uuid: Option<String> = None;
        let mut max_file_length: Option<u64> = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "file" => {
                    content = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|e| {
                                warn!("Cannot read file bytes: {}", e);
                                ApplicationError::BadRequest("Invalid file data".to_string())
                            })?
                            .to_vec(),
                    );
                }
                "fileName" => {
                    file_name = Some(field.text().await.map_err(|e| {
                        warn!("Invalid fileName field: {}", e);
                        ApplicationError::BadRequest("Invalid request data".to_string())
                    })?);
                }
                "contentType" => {
                    content_type = Some(field.text().await.map_err(|e| {
                        warn!("Invalid contentType field: {}", e);
                        ApplicationError::BadRequest("Invalid request data".to_string())
                    })?);
                }
                "origin" => {
                    let value = field.text().await.map_err(|e| {
                        warn!("Invalid origin field: {}", e);
                        ApplicationError::BadRequest("Invalid request data".to_string())
                    })?;
                    origin = Some(value.parse().map_err(|_| {
                        warn!("Unknown file origin: {}", value);
                        ApplicationError::BadRequest(format!("Unknown origin '{}'", value))
                    })?);
                }
                "companyUuid" => {
                    company_uuid = Some(field.text().await.map_err(|e| {
                        warn!("Invalid companyUuid field: {}", e);
                        ApplicationError::BadRequest("Invalid request data".to_string())
                    })?);
                }
                "maxFileLength" => {
                    let value = field.text().await.map_err(|e| {
                        warn!("Invalid maxFileLength field: {}", e);
                        ApplicationError::BadRequest("Invalid request data".to_string())
                    })?;
                    max_file_length = Some(value.parse::<u64>().map_err(|_| {
                        ApplicationError::BadRequest(format!(
                            "maxFileLength must be a positive integer, got '{}'",
                            value
                        ))
                    })?);
                }
                _ => {}
            }
        }

        let request = UploadFileRequest {
            company_uuid,
            file: Some(FileUploadModel {
                content,
                file_name,
                content_type,
                origin,
            }),
            max_file_length,
        };

        let result = app_state.storage_facade.upload(request).await?;
        Ok(Json(result))
    }

    /// GET /api/v1/files/{uuid}
    pub async fn get_file_info(
        State(app_state): State<AppState>,
        Path(uuid): Path<String>,
    ) -> Result<Json<ResultResponse<GetFileInfoByUuidResponse>>, ApplicationError> {
        let result = app_state
            .storage_facade
            .get_file_info_by_uuid(GetFileInfoByUuidRequest::new(uuid))
            .await?;
        Ok(Json(result))
    }

    /// POST /api/v1/files/info
    pub async fn get_files_info(
        State(app_state): State<AppState>,
        Json(request): Json<GetFileInfoByUuidListRequest>,
    ) -> Result<Json<ResultResponse<GetFileInfoByUuidListResponse>>, ApplicationError> {
        let result = app_state.storage_facade.get_file_info_by_uuids(request).await?;
        Ok(Json(result))
    }

    /// GET /api/v1/files/{uuid}/content
    pub async fn download_file(
        State(app_state): State<AppState>,
        Path(uuid): Path<String>,
    ) -> Result<Response, ApplicationError> {
        let result = app_state
            .storage_facade
            .load_file_by_uuid(LoadFileByUuidRequest::new(uuid))
            .await?;

        let file = result
            .response
            .ok_or_else(|| ApplicationError::InternalError("Load returned no payload".to_string()))?
            .file;

        info!("Serving file content for {}", file.file_name);

        let content_type = file
            .content_type
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let response = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, file.content.len())
            .header(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            )
            .body(Body::from(file.content))
            .unwrap();

        Ok(response)
    }

    /// GET /api/v1/imports/check
    pub async fn check_import_already_uploaded(
        State(app_state): State<AppState>,
        Query(query): Query<CheckImportQuery>,
    ) -> Result<Json<ResultResponse<CheckImportAlreadyUploadedResponse>>, ApplicationError> {
        let result = app_state
            .storage_facade
            .check_import_already_uploaded(query.into())
            .await?;
        Ok(Json(result))
    }
}
