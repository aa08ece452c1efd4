use serde::{Deserialize, Serialize};

/// Which storage provider backs the service.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum Provider {
    #[serde(rename = "memory")]
    Memory,
    #[serde(rename = "local")]
    Local,
}

pub const DEFAULT_MAX_FILE_LENGTH: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub provider: Provider,
    pub data_dir: String,
    pub max_file_length: u64,
    pub port: u16,
}

impl ServiceConfig {
    /// Reads the configuration from the environment. Invalid values are
    /// startup errors, not recoverable conditions.
    pub fn from_env() -> Self {
        let provider = match std::env::var("PROVIDER").as_deref() {
            Ok("local") => Provider::Local,
            Ok("memory") | Err(_) => Provider::Memory,
            Ok(other) => panic!("PROVIDER must be 'memory' or 'local', got '{}'", other),
        };

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let max_file_length = std::env::var("MAX_FILE_LENGTH")
            .map(|v| {
                v.parse::<u64>()
                    .expect("MAX_FILE_LENGTH must be a valid u64")
            })
            .unwrap_or(DEFAULT_MAX_FILE_LENGTH);

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        Self {
            provider,
            data_dir,
            max_file_length,
            port,
        }
    }
}
