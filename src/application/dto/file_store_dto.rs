use crate::domain::models::file::FileOrigin;

/// Persistence-side metadata travelling with an upload.
///
/// `company_uuid` is stamped by the facade after conversion, not by the
/// conversion component itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaDataDto {
    pub company_uuid: Option<String>,
    pub origin: FileOrigin,
}

/// What the storage provider receives when a file is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStoreDto {
    pub content: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub meta: FileMetaDataDto,
}
