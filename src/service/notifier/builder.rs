//! Embed builders for welcome and invite-log notifications.
//!
//! Kept free of I/O so the exact payloads can be asserted in tests.

use chrono::{DateTime, SecondsFormat, Utc};
use serenity::all::{CreateEmbed, Mentionable, Timestamp, UserId};

use crate::{
    error::{internal::InternalError, AppError},
    model::{guild_configuration::WelcomeSettings, notification::InviteDetails},
};

/// Placeholder replaced by the new member's mention.
pub const USER_PLACEHOLDER: &str = "{user}";

pub const INVITE_LOG_TITLE: &str = "New Invite Created";

/// Replaces every `{user}` in the template with a mention of `user_id`.
pub fn render_welcome_message(template: &str, user_id: u64) -> String {
    let mention = UserId::new(user_id).mention().to_string();

    template.replace(USER_PLACEHOLDER, &mention)
}

/// Builds the welcome embed.
///
/// The description is only set when a message is configured and the image only when
/// an image URL is configured.
pub fn build_welcome_embed(settings: &WelcomeSettings, user_id: u64, color: u32) -> CreateEmbed {
    let mut embed = CreateEmbed::new().color(color);

    if let Some(message) = &settings.message {
        embed = embed.description(render_welcome_message(message, user_id));
    }

    if let Some(image_url) = &settings.image_url {
        embed = embed.image(image_url);
    }

    embed
}

/// Builds the invite log embed.
///
/// # Arguments
/// - `invite` - Invite that was created
/// - `channel_name` - Display name of the channel the invite points at
/// - `sent_at` - Time shown in the embed footer timestamp
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready to send
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - `sent_at` out of range
pub fn build_invite_log_embed(
    invite: &InviteDetails,
    channel_name: &str,
    sent_at: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let timestamp = Timestamp::from_unix_timestamp(sent_at.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: sent_at.timestamp(),
            reason: e.to_string(),
        }
    })?;

    let inviter = invite.inviter_tag.as_deref().unwrap_or("Unknown");

    Ok(CreateEmbed::new()
        .title(INVITE_LOG_TITLE)
        .field("Inviter", inviter, false)
        .field("Code", &invite.code, false)
        .field("Channel", channel_name, false)
        .field("Expires At", format_expiration(invite.expires_at()), false)
        .timestamp(timestamp))
}

/// Formats an invite expiry as RFC 3339 with milliseconds, or `Never`.
pub fn format_expiration(expires_at: Option<DateTime<Utc>>) -> String {
    match expires_at {
        Some(at) => at.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => "Never".to_string(),
    }
}
