//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error shared by the bot and the dashboard. It wraps the
//! domain-specific errors and implements `IntoResponse`, so dashboard handlers can
//! return `Result<_, AppError>` and get either a redirect (authentication problems) or
//! a rendered HTML error page. Bot handlers never surface errors to Discord; they log
//! them and move on.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, internal::InternalError},
    view::{
        self,
        error::{ErrorPage, ErrorPageProps},
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()`, which redirects instead of
    /// rendering an error.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// The configuration store could not be reached or rejected the query.
    ///
    /// Results in 500 Internal Server Error on the dashboard; the bot logs and skips
    /// the notification.
    #[error("configuration store unavailable: {0}")]
    StoreUnavailable(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest (Discord user API).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Socket error while binding or serving the dashboard.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal state, usually a bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A submitted value failed validation at the store boundary.
    ///
    /// Results in 400 Bad Request when not handled by the caller. The dashboard
    /// catches it and shows the reason as a flash message instead.
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field as shown to the user.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Boxes serenity errors to keep `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// - `AuthErr` - delegated to `AuthError::into_response()` (redirects)
/// - `Validation` - 400 Bad Request page with the message
/// - everything else - logged, 500 Internal Server Error page with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err @ Self::Validation { .. } => {
                error_page(StatusCode::BAD_REQUEST, err.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper turning any displayable error into a logged 500 response.
///
/// The client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong, please try again later.".to_string(),
        )
    }
}

fn error_page(status: StatusCode, message: String) -> Response {
    let page = view::render(
        ErrorPage,
        ErrorPageProps::builder()
            .status(status.as_u16())
            .message(message)
            .build(),
    );

    (status, page).into_response()
}
