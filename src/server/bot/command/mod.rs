//! Slash commands for key administration.
//!
//! Command definitions are registered once the gateway reports ready. Dispatch is
//! split in two: `key::KeyCommand` parses and executes a request against the
//! stores without any serenity types involved, and the interaction handler only
//! converts between the Discord payload and that value.

use serenity::all::{
    Command, CommandOptionType, CreateCommand, CreateCommandOption, GuildId, Http,
};

use crate::server::{error::AppError, model::key::DurationClass};

pub mod key;

#[cfg(test)]
mod test;

pub const GENKEY: &str = "genkey";
pub const CHECKKEY: &str = "checkkey";
pub const REVOKEKEY: &str = "revokekey";

/// Builds the definitions of every slash command the bot offers.
pub fn definitions() -> Vec<CreateCommand> {
    let duration = DurationClass::ALL.iter().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            "type",
            "Key duration: day, week, month, year, lifetime",
        )
        .required(true),
        |option, class| option.add_string_choice(class.as_str(), class.as_str()),
    );

    vec![
        CreateCommand::new(GENKEY)
            .description("Generate a new key")
            .add_option(duration),
        CreateCommand::new(CHECKKEY)
            .description("Check key status")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "key", "Key to check")
                    .required(true),
            ),
        CreateCommand::new(REVOKEKEY)
            .description("Revoke a key")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "key", "Key to revoke")
                    .required(true),
            ),
    ]
}

/// Registers the slash commands with Discord.
///
/// Guild registration takes effect immediately and is used when a guild is
/// configured. Global registration can take up to an hour to propagate.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `guild_id` - Guild to register in, global registration when `None`
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError::DiscordErr)` - Discord rejected the registration
pub async fn register(http: &Http, guild_id: Option<u64>) -> Result<usize, AppError> {
    let commands = match guild_id {
        Some(id) => GuildId::new(id).set_commands(http, definitions()).await?,
        None => Command::set_global_commands(http, definitions()).await?,
    };

    Ok(commands.len())
}
