//! Bot configuration singleton.

use serde::{Deserialize, Serialize};

/// Runtime settings changed by operators and by ticket creation.
///
/// Channel ids are persisted as strings, matching how Discord snowflakes are
/// exchanged everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfig {
    /// Channel receiving welcome messages, if one has been designated.
    pub welcome_channel_id: Option<String>,
    /// Number given to the next ticket. Starts at 1 and only ever increases.
    pub ticket_counter: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            welcome_channel_id: None,
            ticket_counter: 1,
        }
    }
}
