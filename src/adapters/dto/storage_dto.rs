use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::application::models::request::CheckImportAlreadyUploadedRequest;

/// Query parameters of the duplicate-import check endpoint. Presence is
/// validated by the facade, not here.
#[derive(Debug, Deserialize)]
pub struct CheckImportQuery {
    #[serde(rename = "companyUuid")]
    pub company_uuid: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(rename = "createdAfter")]
    pub created_after: Option<DateTime<Utc>>,
}

impl From<CheckImportQuery> for CheckImportAlreadyUploadedRequest {
    fn from(query: CheckImportQuery) -> Self {
        Self {
            company_uuid: query.company_uuid,
            file_name: query.file_name,
            created_after: query.created_after,
        }
    }
}
