use chrono::Utc;
use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, Interaction,
};

use crate::server::{
    bot::{
        command::key::KeyCommand,
        embed::{CLOSE_TICKET, CREATE_TICKET},
        state::BotState,
        ticket,
    },
    error::AppError,
};

/// Routes slash commands and button presses.
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, &command).await,
        Interaction::Component(component) => handle_component(state, &ctx, &component).await,
        _ => {}
    }
}

/// Formats a command result as the private reply text.
fn reply_text(result: Result<String, AppError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => format!("❌ {}", e.user_message()),
    }
}

fn private_reply(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

async fn handle_command(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    let argument = command
        .data
        .options
        .first()
        .and_then(|option| option.value.as_str());

    let Some(key_command) = KeyCommand::parse(&command.data.name, argument) else {
        tracing::warn!("Received unknown slash command /{}", command.data.name);
        return;
    };

    let result = key_command
        .execute(state, command.user.id.get(), Utc::now())
        .await;
    if let Err(AppError::LicenseErr(e)) = &result {
        tracing::debug!(
            "/{} by user {} rejected: {}",
            command.data.name,
            command.user.id,
            e
        );
    }

    if let Err(e) = command
        .create_response(&ctx.http, private_reply(reply_text(result)))
        .await
    {
        tracing::error!("Failed to reply to /{}: {}", command.data.name, e);
    }
}

async fn handle_component(state: &BotState, ctx: &Context, component: &ComponentInteraction) {
    let response = match component.data.custom_id.as_str() {
        CREATE_TICKET => private_reply(reply_text(
            ticket::create_ticket(state, ctx, component).await,
        )),
        CLOSE_TICKET => {
            let permissions = component
                .member
                .as_ref()
                .and_then(|member| member.permissions);
            if !ticket::can_close(permissions) {
                private_reply(ticket::CLOSE_DENIED)
            } else {
                ticket::schedule_close(ctx.http.clone(), component.channel_id);

                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content("Closing this ticket in 5 seconds..."),
                )
            }
        }
        other => {
            tracing::warn!("Received unknown button {}", other);
            return;
        }
    };

    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to respond to button {}: {}",
            component.data.custom_id,
            e
        );
    }
}
