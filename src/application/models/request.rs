use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    application::{error::ApplicationError, models::storage::FileUploadModel},
    domain::models::file::FileUpload,
};

/// Validated form of [`UploadFileRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidUploadRequest {
    pub company_uuid: String,
    pub upload: FileUpload,
    pub max_file_length: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct UploadFileRequest {
    pub company_uuid: Option<String>,
    pub file: Option<FileUploadModel>,
    pub max_file_length: Option<u64>,
}

impl UploadFileRequest {
    pub fn new(company_uuid: impl Into<String>, file: FileUploadModel) -> Self {
        Self {
            company_uuid: Some(company_uuid.into()),
            file: Some(file),
            max_file_length: None,
        }
    }

    pub fn validate(self) -> Result<ValidUploadRequest, ApplicationError> {
        let company_uuid = self
            .company_uuid
            .ok_or_else(|| ApplicationError::BadRequest("missing company uuid".to_string()))?;
        let upload = self
            .file
            .ok_or_else(|| ApplicationError::BadRequest("missing upload model".to_string()))?
            .validate()?;

        Ok(ValidUploadRequest {
            company_uuid,
            upload,
            max_file_length: self.max_file_length,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetFileInfoByUuidRequest {
    pub uuid: Option<String>,
}

impl GetFileInfoByUuidRequest {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
        }
    }

    pub fn validate(self) -> Result<String, ApplicationError> {
        self.uuid
            .ok_or_else(|| ApplicationError::BadRequest("missing file uuid".to_string()))
    }
}

/// Batch lookup request. A JSON array may carry `null` elements, so each
/// element is optional until validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetFileInfoByUuidListRequest {
    pub uuids: Option<Vec<Option<String>>>,
}

impl GetFileInfoByUuidListRequest {
    pub fn new(uuids: Vec<String>) -> Self {
        Self {
            uuids: Some(uuids.into_iter().map(Some).collect()),
        }
    }

    pub fn validate(self) -> Result<Vec<String>, ApplicationError> {
        let uuids = self
            .uuids
            .ok_or_else(|| ApplicationError::BadRequest("missing file uuid list".to_string()))?;

        uuids
            .into_iter()
            .map(|uuid| {
                uuid.ok_or_else(|| {
                    ApplicationError::BadRequest("file uuid list contains a null entry".to_string())
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadFileByUuidRequest {
    pub uuid: Option<String>,
}

impl LoadFileByUuidRequest {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
        }
    }

    pub fn validate(self) -> Result<String, ApplicationError> {
        self.uuid
            .ok_or_else(|| ApplicationError::BadRequest("missing file uuid".to_string()))
    }
}

/// Validated form of [`CheckImportAlreadyUploadedRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCheckImportRequest {
    pub company_uuid: String,
    pub file_name: String,
    pub created_after: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckImportAlreadyUploadedRequest {
    #[serde(rename = "companyUuid")]
    pub company_uuid: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(rename = "createdAfter")]
    pub created_after: Option<DateTime<Utc>>,
}

impl CheckImportAlreadyUploadedRequest {
    pub fn new(
        company_uuid: impl Into<String>,
        file_name: impl Into<String>,
        created_after: DateTime<Utc>,
    ) -> Self {
        Self {
            company_uuid: Some(company_uuid.into()),
            file_name: Some(file_name.into()),
            created_after: Some(created_after),
        }
    }

    pub fn validate(self) -> Result<ValidCheckImportRequest, ApplicationError> {
        let company_uuid = self
            .company_uuid
            .ok_or_else(|| ApplicationError::BadRequest("missing company uuid".to_string()))?;
        let file_name = self
            .file_name
            .ok_or_else(|| ApplicationError::BadRequest("missing file name".to_string()))?;
        let created_after = self
            .created_after
            .ok_or_else(|| ApplicationError::BadRequest("missing created-after bound".to_string()))?;

        Ok(ValidCheckImportRequest {
            company_uuid,
            file_name,
            created_after,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_list_validate_flattens_present_entries() {
        let request =
            GetFileInfoByUuidListRequest::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(request.validate().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn uuid_list_validate_rejects_null_entry() {
        let request = GetFileInfoByUuidListRequest {
            uuids: Some(vec![Some("a".to_string()), None]),
        };
        assert!(matches!(
            request.validate(),
            Err(ApplicationError::BadRequest(_))
        ));
    }

    #[test]
    fn check_import_validate_rejects_each_missing_field() {
        let complete = CheckImportAlreadyUploadedRequest::new("company", "file.csv", Utc::now());

        let mut missing_company = complete.clone();
        missing_company.company_uuid = None;
        assert!(missing_company.validate().is_err());

        let mut missing_name = complete.clone();
        missing_name.file_name = None;
        assert!(missing_name.validate().is_err());

        let mut missing_bound = complete.clone();
        missing_bound.created_after = None;
        assert!(missing_bound.validate().is_err());

        assert!(complete.validate().is_ok());
    }
}
