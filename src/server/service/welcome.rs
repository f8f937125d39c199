use crate::server::{data::bot_config::BotConfigStore, error::AppError};

/// Service managing where welcome messages are posted.
pub struct WelcomeService<'a> {
    config: &'a BotConfigStore,
}

impl<'a> WelcomeService<'a> {
    pub fn new(config: &'a BotConfigStore) -> Self {
        Self { config }
    }

    /// Channel currently designated for welcome messages.
    pub async fn destination(&self) -> Result<Option<u64>, AppError> {
        self.config.welcome_channel().await
    }

    /// Designates `channel_id` as the welcome channel, replacing any previous one.
    pub async fn designate(&self, channel_id: u64) -> Result<(), AppError> {
        self.config.set_welcome_channel(Some(channel_id)).await?;

        tracing::info!("Welcome channel set to {}", channel_id);

        Ok(())
    }

    /// Clears the welcome channel if it is still `channel_id`.
    ///
    /// Called when the designated channel turned out to no longer exist. A channel
    /// designated in the meantime is left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - Destination cleared
    /// - `Ok(false)` - Destination had already changed
    pub async fn forget(&self, channel_id: u64) -> Result<bool, AppError> {
        if self.destination().await? != Some(channel_id) {
            return Ok(false);
        }

        self.config.set_welcome_channel(None).await?;

        tracing::warn!(
            "Welcome channel {} no longer exists, destination cleared",
            channel_id
        );

        Ok(true)
    }
}
