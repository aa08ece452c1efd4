use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::models::storage::{FileLoadModel, StoredFileInfo};

/// Business-rule error kinds surfaced through the result envelope.
///
/// These are outcomes of a completed call, not transport or contract
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    ImportFileMaxSizeExceeded,
}

/// Generic result envelope: either a payload or a non-empty error map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultResponse<T> {
    pub response: Option<T>,
    pub errors: HashMap<ErrorType, Value>,
}

impl<T> ResultResponse<T> {
    pub fn new(response: T) -> Self {
        Self {
            response: Some(response),
            errors: HashMap::new(),
        }
    }

    pub fn with_errors(errors: HashMap<ErrorType, Value>) -> Self {
        Self {
            response: None,
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadFileResponse {
    #[serde(rename = "fileInfo")]
    pub file_info: StoredFileInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetFileInfoByUuidResponse {
    #[serde(rename = "fileInfo")]
    pub file_info: StoredFileInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetFileInfoByUuidListResponse {
    #[serde(rename = "filesInfo")]
    pub files_info: Vec<StoredFileInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadFileByUuidResponse {
    pub file: FileLoadModel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckImportAlreadyUploadedResponse {
    pub uuids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_without_errors() {
        let result = ResultResponse::new("payload");
        assert!(!result.has_errors());
        assert_eq!(result.response, Some("payload"));
    }

    #[test]
    fn envelope_with_errors_has_no_payload() {
        let mut errors = HashMap::new();
        errors.insert(ErrorType::ImportFileMaxSizeExceeded, json!(2048));
        let result: ResultResponse<()> = ResultResponse::with_errors(errors);
        assert!(result.has_errors());
        assert!(result.response.is_none());
    }

    #[test]
    fn error_type_serializes_as_screaming_snake_case() {
        let serialized = serde_json::to_string(&ErrorType::ImportFileMaxSizeExceeded).unwrap();
        assert_eq!(serialized, "\"IMPORT_FILE_MAX_SIZE_EXCEEDED\"");
    }
}
