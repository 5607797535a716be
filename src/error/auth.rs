use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use oauth2::{
    basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse,
};
use thiserror::Error;

use crate::view::{
    self,
    error::{ErrorPage, ErrorPageProps},
};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// Redirects to the landing page.
    #[error("Request is not authenticated")]
    Unauthenticated,

    /// The user cannot manage the requested guild.
    ///
    /// Either the guild is not in the user's OAuth guild list or the user lacks the
    /// owner/administrator/manage-server permission there. Redirects to the dashboard.
    #[error("User {user_id} attempted to access guild {guild_id} without manage permissions")]
    GuildAccessDenied { user_id: String, guild_id: String },

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the token stored in the session,
    /// or no token was stored. Redirects to the landing page.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Discord reported an error on the callback (e.g. the user cancelled).
    ///
    /// Redirects to the landing page.
    #[error("Discord returned an OAuth error: {0}")]
    OAuthDenied(String),

    /// The authorization code could not be exchanged for an access token.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(
        #[from]
        RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ),
}

/// Converts authentication errors into HTTP responses.
///
/// Authentication and authorization failures are never shown as raw errors:
/// - `Unauthenticated` / `CsrfValidationFailed` / `OAuthDenied` → 303 to `/`
/// - `GuildAccessDenied` → 303 to `/dashboard`
/// - `TokenExchange` → 502 Bad Gateway page with a generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => Redirect::to("/").into_response(),
            Self::GuildAccessDenied { .. } => {
                tracing::debug!("{}", self);
                Redirect::to("/dashboard").into_response()
            }
            Self::CsrfValidationFailed | Self::OAuthDenied(_) => {
                tracing::warn!("{}", self);
                Redirect::to("/").into_response()
            }
            Self::TokenExchange(_) => {
                tracing::error!("{}", self);
                let page = view::render(
                    ErrorPage,
                    ErrorPageProps::builder()
                        .status(StatusCode::BAD_GATEWAY.as_u16())
                        .message("There was an issue logging you in, please try again.".to_string())
                        .build(),
                );
                (StatusCode::BAD_GATEWAY, page).into_response()
            }
        }
    }
}
