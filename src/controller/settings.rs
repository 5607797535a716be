//! Welcome and invite-log settings pages of one guild.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::FlashSession},
    model::{discord::ChannelSummary, guild_configuration::UpdateGuildConfigurationParam},
    service::guild_configuration::GuildConfigurationService,
    state::AppState,
    view::{
        self,
        invite_logs::{InviteLogsSettingsPage, InviteLogsSettingsPageProps},
        welcome::{WelcomeSettingsPage, WelcomeSettingsPageProps},
    },
};

const SETTINGS_SAVED: &str = "Settings saved";

/// Welcome form fields. A field missing from the body leaves the stored value alone;
/// a submitted empty field clears it.
#[derive(Deserialize)]
pub struct WelcomeForm {
    #[serde(rename = "welcomeMessage")]
    pub welcome_message: Option<String>,
    #[serde(rename = "welcomeChannelId")]
    pub welcome_channel_id: Option<String>,
    #[serde(rename = "welcomeImageUrl")]
    pub welcome_image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct InviteLogsForm {
    #[serde(rename = "inviteLogsChannelId")]
    pub invite_logs_channel_id: Option<String>,
}

pub async fn get_welcome(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, guild) = AuthGuard::new(&session).require_guild(&guild_id).await?;

    let config = GuildConfigurationService::new(&state.db)
        .get(&guild_id)
        .await?;
    let channels = guild_channels(&state, &guild_id).await;
    let flash = FlashSession::new(&session).take().await?;

    let (welcome_message, welcome_channel_id, welcome_image_url) = match config {
        Some(config) => (
            config.welcome_message.unwrap_or_default(),
            config.welcome_channel_id.unwrap_or_default(),
            config.welcome_image_url.unwrap_or_default(),
        ),
        None => Default::default(),
    };

    Ok(view::render(
        WelcomeSettingsPage,
        WelcomeSettingsPageProps::builder()
            .username(user.username)
            .guild(guild)
            .channels(channels)
            .welcome_message(welcome_message)
            .welcome_channel_id(welcome_channel_id)
            .welcome_image_url(welcome_image_url)
            .flash(flash)
            .build(),
    ))
}

pub async fn post_welcome(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
    Form(form): Form<WelcomeForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require_guild(&guild_id).await?;

    let param = UpdateGuildConfigurationParam {
        welcome_message: form_text(form.welcome_message),
        welcome_channel_id: form_field(form.welcome_channel_id),
        welcome_image_url: form_field(form.welcome_image_url),
        invite_logs_channel_id: None,
    };
    save(&state, &session, &guild_id, param).await?;

    Ok(Redirect::to(&format!("/dashboard/{}/welcome", guild_id)))
}

pub async fn get_invite_logs(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, guild) = AuthGuard::new(&session).require_guild(&guild_id).await?;

    let config = GuildConfigurationService::new(&state.db)
        .get(&guild_id)
        .await?;
    let channels = guild_channels(&state, &guild_id).await;
    let flash = FlashSession::new(&session).take().await?;

    let invite_logs_channel_id = config
        .and_then(|config| config.invite_logs_channel_id)
        .unwrap_or_default();

    Ok(view::render(
        InviteLogsSettingsPage,
        InviteLogsSettingsPageProps::builder()
            .username(user.username)
            .guild(guild)
            .channels(channels)
            .invite_logs_channel_id(invite_logs_channel_id)
            .flash(flash)
            .build(),
    ))
}

pub async fn post_invite_logs(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
    Form(form): Form<InviteLogsForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require_guild(&guild_id).await?;

    let param = UpdateGuildConfigurationParam {
        invite_logs_channel_id: form_field(form.invite_logs_channel_id),
        ..Default::default()
    };
    save(&state, &session, &guild_id, param).await?;

    Ok(Redirect::to(&format!("/dashboard/{}/invite-logs", guild_id)))
}

/// Writes the update and leaves the outcome as a flash message.
///
/// Validation failures are reported to the user; any other error fails the request.
async fn save(
    state: &AppState,
    session: &Session,
    guild_id: &str,
    param: UpdateGuildConfigurationParam,
) -> Result<(), AppError> {
    let flash = FlashSession::new(session);

    match GuildConfigurationService::new(&state.db)
        .upsert(guild_id, param)
        .await
    {
        Ok(_) => flash.set(SETTINGS_SAVED).await,
        Err(err @ AppError::Validation { .. }) => {
            tracing::debug!("Rejected settings for guild {}: {}", guild_id, err);
            flash.set(err.to_string()).await
        }
        Err(err) => Err(err),
    }
}

/// Maps a submitted form value to a partial update field.
fn form_field(value: Option<String>) -> Option<Option<String>> {
    let value = value?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        Some(None)
    } else {
        Some(Some(trimmed.to_string()))
    }
}

/// Like `form_field`, but keeps the text as typed so messages can start or end with
/// blank lines.
fn form_text(value: Option<String>) -> Option<Option<String>> {
    let value = value?;

    if value.trim().is_empty() {
        Some(None)
    } else {
        Some(Some(value))
    }
}

/// Channels for the pickers; an unreachable guild renders with an empty list.
async fn guild_channels(state: &AppState, guild_id: &str) -> Vec<ChannelSummary> {
    let Ok(id) = guild_id.parse::<u64>() else {
        return Vec::new();
    };

    match state.discord.guild_channels(id).await {
        Ok(channels) => channels,
        Err(e) => {
            tracing::warn!("Failed to fetch channels of guild {}: {}", guild_id, e);
            Vec::new()
        }
    }
}
