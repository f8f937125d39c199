use crate::server::{
    config::Config,
    data::{bot_config::BotConfigStore, key::KeyStore},
    middleware::auth::Operators,
};

/// Shared state handed to every bot event handler.
#[derive(Clone)]
pub struct BotState {
    pub keys: KeyStore,
    pub bot_config: BotConfigStore,
    pub operators: Operators,
    /// Product prefix for generated keys.
    pub key_prefix: String,
    /// Guild receiving slash command registrations, global when `None`.
    pub guild_id: Option<u64>,
}

impl BotState {
    pub fn new(config: &Config, keys: KeyStore, bot_config: BotConfigStore) -> Self {
        Self {
            keys,
            bot_config,
            operators: Operators::new(config.admin_user_ids.iter().copied()),
            key_prefix: config.key_prefix.clone(),
            guild_id: config.guild_id,
        }
    }
}
