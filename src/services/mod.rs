mod error;
mod local_storage;
mod memory_storage;

pub use error::StorageError;
pub use local_storage::LocalStorageService;
pub use memory_storage::InMemoryStorageService;

use std::sync::Arc;

use crate::{
    application::services::StorageService,
    domain::config::service::{Provider, ServiceConfig},
};

pub async fn create_storage_service(
    config: &ServiceConfig,
) -> Result<Arc<dyn StorageService>, StorageError> {
    match config.provider {
        Provider::Memory => Ok(Arc::new(InMemoryStorageService::new())),
        Provider::Local => {
            let service = LocalStorageService::new(config.data_dir.clone()).await?;
            Ok(Arc::new(service))
        }
    }
}
