//! Message builders for everything the bot posts.
//!
//! These functions only assemble serenity builders and never touch the network, so
//! the handlers stay small and the message layouts can be checked in isolation.

use chrono::{DateTime, Utc};
use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
    Mentionable, ReactionType, Timestamp, UserId,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::ticket::Ticket,
};

/// Custom id of the button on the ticket panel.
pub const CREATE_TICKET: &str = "create_ticket";
/// Custom id of the button inside a ticket channel.
pub const CLOSE_TICKET: &str = "close_ticket";

pub const PANEL_COLOR: u32 = 0x2ECC71;
pub const TICKET_COLOR: u32 = 0x5865F2;
pub const CONFIRM_COLOR: u32 = 0x3498DB;
pub const WELCOME_COLOR: u32 = 0xFEE75C;

/// Converts a chrono timestamp into the form embeds expect.
///
/// # Returns
/// - `Ok(Timestamp)` - Converted timestamp (second precision)
/// - `Err(InternalError::InvalidDiscordTimestamp)` - Timestamp out of Discord's range
pub fn discord_timestamp(now: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
            timestamp: now.timestamp(),
            reason: e.to_string(),
        })
    })
}

/// Panel posted by `!ticket`.
pub fn ticket_panel_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("Create a Ticket")
        .description(
            "Click the button below to open a private ticket for purchasing or support.",
        )
        .color(PANEL_COLOR)
}

pub fn create_ticket_button() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(CREATE_TICKET)
        .label("Create Ticket")
        .style(ButtonStyle::Success)
        .emoji(ReactionType::Unicode("🎟️".to_string()))])
}

/// Greeting embed posted as the first message of a new ticket channel.
///
/// # Arguments
/// - `ticket` - The claimed ticket
/// - `opener` - User who pressed the create button
/// - `opener_tag` - Display tag of the opener for the footer
/// - `timestamp` - Creation time
pub fn ticket_embed(
    ticket: &Ticket,
    opener: UserId,
    opener_tag: &str,
    timestamp: Timestamp,
) -> CreateEmbed {
    CreateEmbed::new()
        .title(ticket.title())
        .description(format!(
            "Welcome, {}! An admin will be with you shortly.\n\n\
             Please describe the product you wish to purchase or the issue you are facing.",
            opener.mention()
        ))
        .footer(CreateEmbedFooter::new(format!(
            "Ticket created by {}",
            opener_tag
        )))
        .color(TICKET_COLOR)
        .timestamp(timestamp)
}

pub fn close_ticket_button() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(CLOSE_TICKET)
        .label("Close Ticket")
        .style(ButtonStyle::Danger)])
}

/// Mention line posted above the ticket embed, pinging the opener and the first operator.
pub fn ticket_mentions(opener: UserId, operator: Option<u64>) -> String {
    match operator {
        Some(id) => format!("{} {}", opener.mention(), UserId::new(id).mention()),
        None => opener.mention().to_string(),
    }
}

/// Confirmation posted after `!setwelcome`.
pub fn welcome_confirmation_embed(channel_id: ChannelId) -> CreateEmbed {
    CreateEmbed::new()
        .description(format!(
            "✅ Welcome messages will now be sent to this channel ({}).",
            channel_id.mention()
        ))
        .color(CONFIRM_COLOR)
}

/// Greeting for a member who just joined.
pub fn welcome_embed(
    guild_name: &str,
    member: UserId,
    avatar_url: String,
    timestamp: Timestamp,
) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("Welcome to {}!", guild_name))
        .description(format!(
            "Hello {}, we're happy to have you here!",
            member.mention()
        ))
        .thumbnail(avatar_url)
        .color(WELCOME_COLOR)
        .timestamp(timestamp)
}
