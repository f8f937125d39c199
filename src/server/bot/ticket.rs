//! Support ticket channels.
//!
//! A ticket is a private text channel visible to the member who opened it and to
//! every operator. Members other than operators may only hold one open ticket at a
//! time, tracked through the member overwrite the ticket channel carries for them.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use serenity::all::{
    ChannelId, ChannelType, ComponentInteraction, Context, CreateChannel, CreateMessage, GuildId,
    Http, Mentionable, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};

use crate::server::{
    bot::{embed, state::BotState},
    error::AppError,
    model::ticket::Ticket,
    service::ticket::TicketService,
};

/// Delay between the close announcement and channel deletion.
pub const CLOSE_DELAY: Duration = Duration::from_secs(5);

pub const CLOSE_DENIED: &str = "❌ You do not have permission to close this ticket.";

/// Permissions granted to the opener and operators inside a ticket channel.
fn participant_permissions() -> Permissions {
    Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::READ_MESSAGE_HISTORY
}

/// Builds the permission overwrites for a new ticket channel.
///
/// `@everyone` is denied view access. The opener and each operator are allowed to
/// view, send and read history. An operator who opens a ticket is listed once.
pub fn ticket_overwrites(
    guild_id: GuildId,
    opener: UserId,
    operators: &[u64],
) -> Vec<PermissionOverwrite> {
    let mut overwrites = vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            // @everyone shares its id with the guild
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
        PermissionOverwrite {
            allow: participant_permissions(),
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(opener),
        },
    ];

    overwrites.extend(
        operators
            .iter()
            .filter(|&&id| id != opener.get())
            .map(|&id| PermissionOverwrite {
                allow: participant_permissions(),
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(UserId::new(id)),
            }),
    );

    overwrites
}

/// Checks whether a channel is an open ticket belonging to `user`.
pub fn owns_ticket(name: &str, overwrites: &[PermissionOverwrite], user: UserId) -> bool {
    Ticket::is_ticket_channel(name)
        && overwrites
            .iter()
            .any(|overwrite| overwrite.kind == PermissionOverwriteType::Member(user))
}

/// Checks whether resolved member permissions allow closing a ticket.
pub fn can_close(permissions: Option<Permissions>) -> bool {
    permissions.is_some_and(|permissions| permissions.manage_channels())
}

/// Opens a ticket for the member who pressed the create button.
///
/// Claims the next ticket number before creating the channel, so a failed
/// creation leaves a gap in the numbering.
///
/// # Returns
/// - `Ok(String)` - Private reply for the member, either a link to the new channel
///   or to the ticket they already have open
/// - `Err(AppError)` - Counter could not be persisted or Discord rejected a request
pub async fn create_ticket(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<String, AppError> {
    let Some(guild_id) = component.guild_id else {
        return Ok("❌ Tickets can only be opened inside a server.".to_string());
    };
    let opener = &component.user;

    // Operators are granted access to every ticket, so their overwrites prove nothing
    if !state.operators.is_operator(opener.id.get()) {
        let channels = guild_id.channels(&ctx.http).await?;
        if let Some(existing) = channels.values().find(|channel| {
            owns_ticket(&channel.name, &channel.permission_overwrites, opener.id)
        }) {
            return Ok(format!(
                "You already have an open ticket: {}",
                existing.id.mention()
            ));
        }
    }

    let ticket = TicketService::new(&state.bot_config).open().await?;

    let channel = guild_id
        .create_channel(
            &ctx.http,
            CreateChannel::new(ticket.channel_name())
                .kind(ChannelType::Text)
                .permissions(ticket_overwrites(
                    guild_id,
                    opener.id,
                    state.operators.ids(),
                )),
        )
        .await?;

    let timestamp = embed::discord_timestamp(Utc::now())?;
    let message = CreateMessage::new()
        .content(embed::ticket_mentions(opener.id, state.operators.primary()))
        .embed(embed::ticket_embed(&ticket, opener.id, &opener.tag(), timestamp))
        .components(vec![embed::close_ticket_button()]);
    channel.id.send_message(&ctx.http, message).await?;

    tracing::info!(
        "Opened ticket #{} for user {} in guild {}",
        ticket.number,
        opener.id,
        guild_id
    );

    Ok(format!(
        "✅ Your ticket has been created: {}",
        channel.id.mention()
    ))
}

/// Deletes a ticket channel after `CLOSE_DELAY`.
///
/// Runs in its own task so the interaction handler returns immediately.
pub fn schedule_close(http: Arc<Http>, channel_id: ChannelId) {
    tokio::spawn(async move {
        tokio::time::sleep(CLOSE_DELAY).await;

        match channel_id.delete(&http).await {
            Ok(_) => tracing::info!("Closed ticket channel {}", channel_id),
            Err(e) => tracing::error!("Failed to delete ticket channel {}: {}", channel_id, e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_hide_channel_from_everyone() {
        let overwrites = ticket_overwrites(GuildId::new(1), UserId::new(10), &[20, 30]);

        assert_eq!(overwrites.len(), 4);
        assert_eq!(
            overwrites[0].kind,
            PermissionOverwriteType::Role(RoleId::new(1))
        );
        assert_eq!(overwrites[0].deny, Permissions::VIEW_CHANNEL);

        for (overwrite, id) in overwrites[1..].iter().zip([10, 20, 30]) {
            assert_eq!(
                overwrite.kind,
                PermissionOverwriteType::Member(UserId::new(id))
            );
            assert_eq!(overwrite.allow, participant_permissions());
        }
    }

    #[test]
    fn operator_opener_is_listed_once() {
        let overwrites = ticket_overwrites(GuildId::new(1), UserId::new(20), &[20, 30]);

        assert_eq!(overwrites.len(), 3);
    }

    #[test]
    fn ownership_requires_ticket_name_and_member_overwrite() {
        let overwrites = ticket_overwrites(GuildId::new(1), UserId::new(10), &[20]);

        assert!(owns_ticket("ticket-4", &overwrites, UserId::new(10)));
        assert!(!owns_ticket("ticket-4", &overwrites, UserId::new(11)));
        assert!(!owns_ticket("general", &overwrites, UserId::new(10)));
    }

    #[test]
    fn closing_requires_manage_channels() {
        assert!(can_close(Some(Permissions::MANAGE_CHANNELS)));
        assert!(!can_close(Some(Permissions::SEND_MESSAGES)));
        assert!(!can_close(None));
    }
}
