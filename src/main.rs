use std::sync::Arc;

use tracing::{error, info};

use itembank::{start_server, AppConfig, RestQuestionBankClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .try_init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                e.to_string(),
            ));
        }
    };

    let bank_api = Arc::new(RestQuestionBankClient::new(
        config.backend_url.clone(),
        config.backend_api_key.clone(),
    ));

    info!(
        addr = %config.bind_addr,
        port = config.bind_port,
        backend = %config.backend_url,
        "itembank starting"
    );

    start_server(config, bank_api)?.await
}
