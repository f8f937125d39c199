//! Bot configuration factory.
//!
//! Produces `{ "welcomeChannelId": string | null, "ticketCounter": number }`.

use serde_json::{json, Value};

/// Factory for the bot configuration document.
pub struct BotConfigFactory {
    welcome_channel_id: Option<String>,
    ticket_counter: u64,
}

impl BotConfigFactory {
    /// Creates a factory with the service defaults (no welcome channel, counter 1).
    pub fn new() -> Self {
        Self {
            welcome_channel_id: None,
            ticket_counter: 1,
        }
    }

    /// Sets the welcome channel id.
    pub fn welcome_channel_id(mut self, channel_id: u64) -> Self {
        self.welcome_channel_id = Some(channel_id.to_string());
        self
    }

    /// Sets the ticket counter.
    pub fn ticket_counter(mut self, counter: u64) -> Self {
        self.ticket_counter = counter;
        self
    }

    /// Builds the JSON document.
    pub fn build(self) -> Value {
        json!({
            "welcomeChannelId": self.welcome_channel_id,
            "ticketCounter": self.ticket_counter,
        })
    }
}

impl Default for BotConfigFactory {
    fn default() -> Self {
        Self::new()
    }
}
