use std::{path::PathBuf, sync::Arc};
use tokio::sync::RwLock;

use crate::server::{
    data::document::JsonDocument, error::AppError, model::bot_config::BotConfig,
    util::parse::parse_u64_from_string,
};

/// Shared handle to the bot configuration singleton.
#[derive(Clone)]
pub struct BotConfigStore {
    config: Arc<RwLock<BotConfig>>,
    document: Arc<JsonDocument<BotConfig>>,
}

impl BotConfigStore {
    /// Loads the configuration from `path`, using the defaults when the file is absent.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let document = JsonDocument::new(path);
        let config = document.load().await?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            document: Arc::new(document),
        })
    }

    /// Snapshot of the current configuration.
    pub async fn get(&self) -> BotConfig {
        self.config.read().await.clone()
    }

    /// Channel designated for welcome messages.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Welcome channel configured
    /// - `Ok(None)` - No welcome channel
    /// - `Err(AppError::InternalErr)` - Stored id is not a valid snowflake
    pub async fn welcome_channel(&self) -> Result<Option<u64>, AppError> {
        self.config
            .read()
            .await
            .welcome_channel_id
            .clone()
            .map(parse_u64_from_string)
            .transpose()
    }

    /// Sets or clears the welcome channel and persists the change.
    pub async fn set_welcome_channel(&self, channel_id: Option<u64>) -> Result<(), AppError> {
        self.update(|config| {
            config.welcome_channel_id = channel_id.map(|id| id.to_string());
        })
        .await
    }

    /// Returns the current ticket number and advances the counter.
    ///
    /// The increment is persisted before the number is handed out, so a number is
    /// never issued twice even across restarts.
    pub async fn claim_ticket_number(&self) -> Result<u64, AppError> {
        self.update(|config| {
            let number = config.ticket_counter;
            config.ticket_counter += 1;
            number
        })
        .await
    }

    async fn update<R>(&self, f: impl FnOnce(&mut BotConfig) -> R) -> Result<R, AppError> {
        let mut config = self.config.write().await;
        let before = config.clone();

        let result = f(&mut config);

        if let Err(e) = self.document.save(&config).await {
            *config = before;
            return Err(e);
        }

        Ok(result)
    }
}
