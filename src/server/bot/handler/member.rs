use chrono::Utc;
use serenity::all::{ChannelId, Context, CreateMessage, Member};

use crate::server::{
    bot::{embed, state::BotState},
    error::AppError,
    service::welcome::WelcomeService,
};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    if let Err(e) = welcome(state, &ctx, &new_member).await {
        tracing::error!(
            "Failed to welcome user {} in guild {}: {}",
            new_member.user.id,
            new_member.guild_id,
            e
        );
    }
}

/// Posts the welcome embed to the configured channel.
///
/// Clears the destination when the channel no longer exists in the member's guild.
async fn welcome(state: &BotState, ctx: &Context, new_member: &Member) -> Result<(), AppError> {
    let welcome = WelcomeService::new(&state.bot_config);

    let Some(channel_id) = welcome.destination().await? else {
        return Ok(());
    };
    let channel_id = ChannelId::new(channel_id);

    let channels = new_member.guild_id.channels(&ctx.http).await?;
    if !channels.contains_key(&channel_id) {
        if welcome.forget(channel_id.get()).await? {
            tracing::info!(
                "Welcome channel {} no longer exists, destination cleared",
                channel_id
            );
        }
        return Ok(());
    }

    let guild_name = match new_member.guild_id.name(&ctx.cache) {
        Some(name) => name,
        None => new_member.guild_id.to_partial_guild(&ctx.http).await?.name,
    };

    let embed = embed::welcome_embed(
        &guild_name,
        new_member.user.id,
        new_member.user.face(),
        embed::discord_timestamp(Utc::now())?,
    );
    channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;

    tracing::debug!(
        "Welcomed user {} in guild {}",
        new_member.user.id,
        new_member.guild_id
    );

    Ok(())
}
