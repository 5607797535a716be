//! Application state shared across all dashboard request handlers.
//!
//! Built once in `herald-web`'s `main` and cloned into each handler by axum. Every
//! field is cheap to clone: the database handle and `reqwest::Client` are pools, the
//! OAuth client is plain configuration and the Discord gateway sits behind an `Arc`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::service::discord::DiscordGateway;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Configuration store connection pool, shared with the session store.
    pub db: DatabaseConnection,

    /// HTTP client for the Discord user API (OAuth profile and guild list).
    ///
    /// Redirects are disabled.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Discord REST API base used with user access tokens.
    pub discord_api_url: String,

    /// Bot-token Discord client used for fetch-guild and fetch-channels.
    pub discord: Arc<dyn DiscordGateway>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_api_url: String,
        discord: Arc<dyn DiscordGateway>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_api_url,
            discord,
        }
    }
}
