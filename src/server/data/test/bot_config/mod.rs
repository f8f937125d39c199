use crate::server::{data::bot_config::BotConfigStore, error::AppError, model::bot_config::BotConfig};
use test_utils::{builder::TestBuilder, factory::bot_config::BotConfigFactory};

mod claim_ticket_number;
mod load;
mod welcome_channel;
