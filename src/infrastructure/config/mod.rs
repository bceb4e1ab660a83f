use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Runtime configuration, merged from `itembank.toml` and `ITEMBANK_*`
/// environment variables. Env vars win over the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the local HTTP interface binds to
    pub bind_addr: String,

    pub bind_port: u16,

    /// Base URL of the remote question-bank backend
    pub backend_url: String,

    /// Bearer token for the backend, if it requires one
    pub backend_api_key: Option<String>,

    /// Upload size cap enforced at the HTTP boundary. The pipeline itself
    /// imposes no row ceiling; this is caller configuration.
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            bind_port: 3001,
            backend_url: "http://127.0.0.1:8080".to_string(),
            backend_api_key: None,
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("itembank.toml"))
            .merge(Env::prefixed("ITEMBANK_"))
            .extract()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend_url.trim().is_empty() {
            return Err(AppError::Config("backend_url must not be empty".to_string()));
        }
        if self.max_upload_bytes == 0 {
            return Err(AppError::Config("max_upload_bytes must be > 0".to_string()));
        }
        Ok(())
    }
}
