use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::{
    application::models::response::ErrorType, domain::models::file::FileStoreData,
};

/// Business-rule validation over stored records. An empty map means valid.
pub trait StorageValidation: Send + Sync {
    /// Checks the record's length against the effective limit: the explicit
    /// override when given, otherwise the configured default. On violation
    /// the map carries the offending length.
    fn validate_file_max_length(
        &self,
        data: &FileStoreData,
        max_length: Option<u64>,
    ) -> HashMap<ErrorType, Value>;
}

pub struct DefaultStorageValidation {
    default_max_file_length: u64,
}

impl DefaultStorageValidation {
    pub fn new(default_max_file_length: u64) -> Self {
        Self {
            default_max_file_length,
        }
    }
}

impl StorageValidation for DefaultStorageValidation {
    fn validate_file_max_length(
        &self,
        data: &FileStoreData,
        max_length: Option<u64>,
    ) -> HashMap<ErrorType, Value> {
        let effective_max = max_length.unwrap_or(self.default_max_file_length);
        let mut errors = HashMap::new();

        if data.length > effective_max {
            warn!(
                "File {} exceeds max length: {} > {}",
                data.uuid, data.length, effective_max
            );
            errors.insert(
                ErrorType::ImportFileMaxSizeExceeded,
                Value::from(data.length),
            );
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::models::file::FileOrigin;

    fn record_of_length(length: u64) -> FileStoreData {
        FileStoreData {
            uuid: "uuid-1".to_string(),
            file_name: "report.csv".to_string(),
            content_type: Some("text/csv".to_string()),
            origin: FileOrigin::ImportCsv,
            company_uuid: Some("company-1".to_string()),
            length,
            created_at: Utc::now(),
            content: vec![],
        }
    }

    #[test]
    fn record_within_limit_is_valid() {
        let validation = DefaultStorageValidation::new(1024);
        assert!(validation
            .validate_file_max_length(&record_of_length(1024), None)
            .is_empty());
    }

    #[test]
    fn record_over_default_limit_is_rejected() {
        let validation = DefaultStorageValidation::new(1024);
        let errors = validation.validate_file_max_length(&record_of_length(1025), None);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&ErrorType::ImportFileMaxSizeExceeded),
            Some(&Value::from(1025u64))
        );
    }

    #[test]
    fn explicit_override_wins_over_default() {
        let validation = DefaultStorageValidation::new(1024);
        // Stricter override rejects what the default would allow.
        let errors = validation.validate_file_max_length(&record_of_length(512), Some(100));
        assert_eq!(errors.len(), 1);
        // Looser override allows what the default would reject.
        let errors = validation.validate_file_max_length(&record_of_length(2048), Some(4096));
        assert!(errors.is_empty());
    }
}
