use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, InviteCreateEvent};

use crate::{
    model::notification::InviteDetails,
    service::notifier::{NotifierService, NotifyOutcome},
};

/// Handles the invite_create event by logging the invite to the guild's log channel
pub async fn handle_invite_create(db: &DatabaseConnection, ctx: Context, event: InviteCreateEvent) {
    // Invites to group DMs carry no guild
    let Some(guild_id) = event.guild_id.map(|id| id.get()) else {
        return;
    };

    let invite = InviteDetails::from_event(&event);
    // Invite logs have no color setting
    let notifier = NotifierService::new(db, &ctx, 0);

    match notifier.notify_invite_created(guild_id, &invite).await {
        Ok(NotifyOutcome::Sent { channel_id }) => {
            tracing::info!(
                "Logged invite {} in guild {} (channel {})",
                invite.code,
                guild_id,
                channel_id
            );
        }
        Ok(NotifyOutcome::Skipped(reason)) => {
            tracing::debug!("No invite log for guild {}: {}", guild_id, reason);
        }
        Err(e) => {
            tracing::error!("Failed to log invite in guild {}: {}", guild_id, e);
        }
    }
}
