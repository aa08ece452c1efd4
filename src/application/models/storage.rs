use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    application::error::ApplicationError,
    domain::models::file::{FileOrigin, FileStoreData, FileUpload},
};

/// Upload payload as it arrives from the outside. Every field a caller could
/// omit is an `Option`; presence is checked exactly once, in
/// [`FileUploadModel::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileUploadModel {
    pub content: Option<Vec<u8>>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub origin: Option<FileOrigin>,
}

impl FileUploadModel {
    pub fn validate(self) -> Result<FileUpload, ApplicationError> {
        let content = self
            .content
            .ok_or_else(|| ApplicationError::BadRequest("missing file content".to_string()))?;
        let file_name = self
            .file_name
            .ok_or_else(|| ApplicationError::BadRequest("missing file name".to_string()))?;
        let origin = self
            .origin
            .ok_or_else(|| ApplicationError::BadRequest("missing file origin".to_string()))?;

        Ok(FileUpload::new(content, file_name, self.content_type, origin))
    }
}

/// External view of a stored file, distinct from the provider-side record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFileInfo {
    pub uuid: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    pub origin: FileOrigin,
    #[serde(rename = "companyUuid")]
    pub company_uuid: Option<String>,
    pub length: u64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Raw content handle returned by `load_file_by_uuid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLoadModel {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

impl From<&FileStoreData> for FileLoadModel {
    fn from(data: &FileStoreData) -> Self {
        Self {
            file_name: data.file_name.clone(),
            content_type: data.content_type.clone(),
            content: data.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_model() -> FileUploadModel {
        FileUploadModel {
            content: Some(b"hi".to_vec()),
            file_name: Some("report.csv".to_string()),
            content_type: Some("text/csv".to_string()),
            origin: Some(FileOrigin::ImportCsv),
        }
    }

    #[test]
    fn validate_accepts_complete_model() {
        let upload = complete_model().validate().unwrap();
        assert_eq!(upload.file_name, "report.csv");
        assert_eq!(upload.origin, FileOrigin::ImportCsv);
    }

    #[test]
    fn validate_allows_missing_content_type() {
        let mut model = complete_model();
        model.content_type = None;
        let upload = model.validate().unwrap();
        assert_eq!(upload.content_type, None);
    }

    #[test]
    fn validate_rejects_each_missing_required_field() {
        let mut missing_content = complete_model();
        missing_content.content = None;
        assert!(matches!(
            missing_content.validate(),
            Err(ApplicationError::BadRequest(_))
        ));

        let mut missing_name = complete_model();
        missing_name.file_name = None;
        assert!(matches!(
            missing_name.validate(),
            Err(ApplicationError::BadRequest(_))
        ));

        let mut missing_origin = complete_model();
        missing_origin.origin = None;
        assert!(matches!(
            missing_origin.validate(),
            Err(ApplicationError::BadRequest(_))
        ));
    }
}
