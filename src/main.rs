mod adapters;
mod application;
mod domain;
mod services;

use std::sync::Arc;

use adapters::{
    controllers::{
        health_controller::HealthController, storage_controller::StorageController,
    },
    state::AppState,
};
use application::{
    components::{
        DefaultStorageConversion, DefaultStorageValidation, StorageConversion, StorageValidation,
    },
    facade::StorageFacade,
};
use axum::{
    routing::{get, post},
    Router,
};
use domain::config::service::ServiceConfig;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::from_env();
    tracing::info!(
        "Starting filedepot with provider {:?} on port {}",
        config.provider,
        config.port
    );

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    let storage = services::create_storage_service(&config)
        .await
        .expect("Failed to create storage service");
    let conversion = Arc::new(DefaultStorageConversion) as Arc<dyn StorageConversion>;
    let validation = Arc::new(DefaultStorageValidation::new(config.max_file_length))
        as Arc<dyn StorageValidation>;

    let port = config.port;
    let app_state = AppState {
        config: Arc::new(config),
        storage_facade: Arc::new(StorageFacade::new(storage, conversion, validation)),
    };

    let router = Router::new()
        .route("/api/v1/health", get(HealthController::health_check))
        .route("/api/v1/files", post(StorageController::upload_file))
        .route("/api/v1/files/info", post(StorageController::get_files_info))
        .route("/api/v1/files/{uuid}", get(StorageController::get_file_info))
        .route(
            "/api/v1/files/{uuid}/content",
            get(StorageController::download_file),
        )
        .route(
            "/api/v1/imports/check",
            get(StorageController::check_import_already_uploaded),
        )
        .layer(cors)
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
