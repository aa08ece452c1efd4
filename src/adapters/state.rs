use std::sync::Arc;

use axum::extract::FromRef;

use crate::{application::facade::StorageFacade, domain::config::service::ServiceConfig};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub storage_facade: Arc<StorageFacade>,
}
