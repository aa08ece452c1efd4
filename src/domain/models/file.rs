use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileOrigin {
    ImportCsv,
    DirectUpload,
}

impl fmt::Display for FileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOrigin::ImportCsv => write!(f, "IMPORT_CSV"),
            FileOrigin::DirectUpload => write!(f, "DIRECT_UPLOAD"),
        }
    }
}

impl FromStr for FileOrigin {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "IMPORT_CSV" => Ok(FileOrigin::ImportCsv),
            "DIRECT_UPLOAD" => Ok(FileOrigin::DirectUpload),
            _ => Err(()),
        }
    }
}

/// An upload whose required fields have already been checked at the boundary.
///
/// Downstream code (conversion, storage) never re-checks presence.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub content: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub origin: FileOrigin,
}

impl FileUpload {
    pub fn new(
        content: Vec<u8>,
        file_name: String,
        content_type: Option<String>,
        origin: FileOrigin,
    ) -> Self {
        Self {
            content,
            file_name,
            content_type,
            origin,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// A stored file record as the storage provider holds it.
///
/// Created once on `create`, immutable afterwards except for deletion.
/// Carries the raw content alongside the metadata so loading a file needs no
/// second round trip to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStoreData {
    pub uuid: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub origin: FileOrigin,
    pub company_uuid: Option<String>,
    pub length: u64,
    pub created_at: DateTime<Utc>,
    pub content: Vec<u8>,
}
