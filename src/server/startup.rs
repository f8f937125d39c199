use std::{net::SocketAddr, time::Duration};

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::{bot_config::BotConfigStore, key::KeyStore},
    error::AppError,
    service::public_address::PublicAddressService,
};

/// Installs the global tracing subscriber.
///
/// Verbosity follows `RUST_LOG` and defaults to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Builds the outbound HTTP client.
///
/// Redirects are disabled and requests time out after 10 seconds so a slow lookup
/// service cannot hold a task forever.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Loads both persisted documents.
///
/// Missing documents start empty. Unreadable or corrupt documents abort startup.
///
/// # Returns
/// - `Ok((KeyStore, BotConfigStore))` - Stores ready to be shared
/// - `Err(AppError::IoErr | AppError::JsonErr)` - A document could not be loaded
pub async fn load_stores(config: &Config) -> Result<(KeyStore, BotConfigStore), AppError> {
    let keys = KeyStore::load(config.keys_file.clone()).await?;
    let bot_config = BotConfigStore::load(config.config_file.clone()).await?;

    Ok((keys, bot_config))
}

/// Binds the validation endpoint on all interfaces.
///
/// # Returns
/// - `Ok(TcpListener)` - Bound listener
/// - `Err(AppError::IoErr)` - Port unavailable
pub async fn bind_listener(port: u16) -> Result<TcpListener, AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("API listening on {}", addr);

    Ok(listener)
}

/// Discovers the public base URL in the background and records it for operators.
///
/// Failures are logged and otherwise ignored.
pub fn spawn_public_address_discovery(http_client: reqwest::Client, config: &Config) {
    let port = config.api_port;
    let path = config.server_info_file.clone();

    tokio::spawn(async move {
        let service = PublicAddressService::new(http_client);

        match service.publish(port, &path).await {
            Ok(url) => tracing::info!("Public API URL {} written to {}", url, path.display()),
            Err(e) => tracing::error!("Failed to discover public address: {}", e),
        }
    });
}
