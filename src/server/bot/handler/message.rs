use serenity::all::{Context, CreateMessage, Message};

use crate::server::{
    bot::{embed, state::BotState},
    error::AppError,
    service::welcome::WelcomeService,
};

/// Text triggers operators can type in a guild channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    /// `!ticket`: post the ticket panel
    Ticket,
    /// `!setwelcome`: greet new members in this channel
    SetWelcome,
}

impl TextCommand {
    /// Matches the whole message, ignoring case and surrounding whitespace.
    pub fn parse(content: &str) -> Option<Self> {
        match content.trim().to_lowercase().as_str() {
            "!ticket" => Some(Self::Ticket),
            "!setwelcome" => Some(Self::SetWelcome),
            _ => None,
        }
    }
}

/// Handle message creation in a channel
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    // Only guild channels (not DMs), never other bots
    if message.author.bot || message.guild_id.is_none() {
        return;
    }

    let Some(command) = TextCommand::parse(&message.content) else {
        return;
    };

    if !state.operators.is_operator(message.author.id.get()) {
        return;
    }

    if let Err(e) = run(state, &ctx, &message, command).await {
        tracing::error!(
            "Failed to handle {:?} in channel {}: {}",
            command,
            message.channel_id,
            e
        );
    }
}

async fn run(
    state: &BotState,
    ctx: &Context,
    message: &Message,
    command: TextCommand,
) -> Result<(), AppError> {
    match command {
        TextCommand::Ticket => {
            let panel = CreateMessage::new()
                .embed(embed::ticket_panel_embed())
                .components(vec![embed::create_ticket_button()]);
            message.channel_id.send_message(&ctx.http, panel).await?;

            message.delete(&ctx.http).await?;
        }
        TextCommand::SetWelcome => {
            WelcomeService::new(&state.bot_config)
                .designate(message.channel_id.get())
                .await?;

            let confirmation =
                CreateMessage::new().embed(embed::welcome_confirmation_embed(message.channel_id));
            message
                .channel_id
                .send_message(&ctx.http, confirmation)
                .await?;
        }
    }

    Ok(())
}
