pub mod health_controller;
pub mod storage_controller;
