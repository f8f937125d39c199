//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! logs the connection and registers the slash commands, either in the configured
//! guild or globally.

use serenity::all::{Context, Ready};

use crate::server::bot::{command, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// Command registration failures are logged and do not stop the bot; text triggers
/// and buttons keep working without slash commands.
///
/// # Arguments
/// - `state` - Bot state providing the registration guild
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match command::register(&ctx.http, state.guild_id).await {
        Ok(count) => match state.guild_id {
            Some(guild_id) => {
                tracing::info!("Registered {} slash commands in guild {}", count, guild_id)
            }
            None => tracing::info!("Registered {} global slash commands", count),
        },
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
