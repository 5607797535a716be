use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession},
    service::auth::DiscordAuthService,
    state::AppState,
    view::{
        self,
        home::{HomePage, HomePageProps},
    },
};

/// Query parameters Discord appends when redirecting back to `/callback`.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Authorization code to exchange for an access token.
    pub code: Option<String>,
    /// Set instead of `code` when the user cancelled or Discord refused.
    pub error: Option<String>,
}

pub async fn home(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthSession::new(&session).get_user().await?;

    Ok(view::render(
        HomePage,
        HomePageProps::builder()
            .username(user.map(|user| user.username))
            .build(),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    // Consumed up front so a failed attempt cannot be replayed.
    let stored_state = CsrfSession::new(&session).take_token().await?;

    if let Some(error) = params.error {
        return Err(AuthError::OAuthDenied(error).into());
    }

    validate_csrf(stored_state, params.state)?;

    let Some(code) = params.code else {
        return Err(AuthError::OAuthDenied("callback without authorization code".to_string()).into());
    };

    let auth_service = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );
    let login = auth_service.callback(code).await?;

    AuthSession::new(&session)
        .login(&login.user, login.access_token)
        .await?;

    tracing::info!(
        "User {} ({}) logged in with {} guilds",
        login.user.username,
        login.user.id,
        login.user.guilds.len()
    );

    Ok(Redirect::to("/dashboard"))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).logout().await?;

    Ok(Redirect::to("/"))
}

fn validate_csrf(stored: Option<String>, received: Option<String>) -> Result<(), AppError> {
    match (stored, received) {
        (Some(stored), Some(received)) if stored == received => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
