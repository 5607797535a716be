use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Form,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, FlashSession},
    },
    model::discord::{DashboardUser, UserGuild},
    service::auth::DiscordAuthService,
    state::AppState,
    util::parse::is_snowflake,
    view::{
        self,
        dashboard::{DashboardPage, DashboardPageProps, SelectedGuild},
    },
};

#[derive(Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "guildId")]
    pub guild_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SelectGuildForm {
    #[serde(rename = "guildId", default)]
    pub guild_id: String,
}

/// Lists the guilds the user can manage, and details of the chosen one.
///
/// The guild list is fetched from Discord with the user's token on every view and
/// written back to the session, so the settings pages authorize against it too.
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&session);
    let user = guard.require().await?;
    let user = refresh_guilds(&state, &session, user).await?;

    let selected = match query.guild_id.filter(|id| !id.is_empty()) {
        Some(guild_id) => {
            let (_, guild) = guard.require_guild(&guild_id).await?;

            let bot_guild = match guild_id.parse::<u64>() {
                Ok(id) => state.discord.guild(id).await?,
                Err(_) => None,
            };

            Some(SelectedGuild { guild, bot_guild })
        }
        None => None,
    };

    let flash = FlashSession::new(&session).take().await?;
    let guilds: Vec<UserGuild> = user
        .guilds
        .into_iter()
        .filter(|guild| guild.can_manage())
        .collect();

    Ok(view::render(
        DashboardPage,
        DashboardPageProps::builder()
            .username(user.username)
            .guilds(guilds)
            .selected(selected)
            .flash(flash)
            .build(),
    ))
}

/// Replaces the session's guild list with the one Discord reports now.
///
/// A missing or rejected access token ends the session.
async fn refresh_guilds(
    state: &AppState,
    session: &Session,
    mut user: DashboardUser,
) -> Result<DashboardUser, AppError> {
    let auth_session = AuthSession::new(session);

    let Some(access_token) = auth_session.get_access_token().await? else {
        auth_session.logout().await?;
        return Err(AuthError::Unauthenticated.into());
    };

    let auth_service = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );

    match auth_service.fetch_user_guilds(&access_token).await {
        Ok(guilds) => {
            user.guilds = guilds;
            auth_session.update_user(&user).await?;

            Ok(user)
        }
        Err(e) => {
            tracing::warn!("Failed to refresh guilds of user {}: {}", user.id, e);
            auth_session.logout().await?;

            Err(AuthError::Unauthenticated.into())
        }
    }
}

pub async fn post_dashboard(
    session: Session,
    Form(form): Form<SelectGuildForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let guild_id = form.guild_id.trim();
    if !is_snowflake(guild_id) {
        FlashSession::new(&session)
            .set("Please choose a server.")
            .await?;

        return Ok(Redirect::to("/dashboard"));
    }

    Ok(Redirect::to(&format!("/dashboard?guildId={}", guild_id)))
}
