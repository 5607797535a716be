//! OAuth2 login with Discord

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use serenity::all::User as DiscordUser;
use url::Url;

use crate::{
    error::{auth::AuthError, AppError},
    model::discord::{DashboardUser, UserGuild},
    state::OAuth2Client,
};

/// Scopes requested at login: the user's identity and their guild list.
const LOGIN_SCOPES: [&str; 2] = ["identify", "guilds"];

/// Outcome of a successful login.
pub struct LoginResult {
    pub user: DashboardUser,
    pub access_token: String,
}

pub struct DiscordAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    /// Base URL of the Discord REST API, without trailing slash.
    api_url: &'a str,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        api_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            api_url,
        }
    }

    /// Builds the Discord authorize URL and the CSRF token to keep in the session.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(LOGIN_SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        (authorize_url, csrf_state)
    }

    /// Exchanges the authorization code and loads the user's profile and guilds.
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - User profile, guild list and access token
    /// - `Err(AppError::AuthErr(TokenExchange))` - Discord rejected the code
    /// - `Err(AppError::ReqwestErr)` - Profile or guild list request failed
    pub async fn callback(&self, authorization_code: String) -> Result<LoginResult, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let access_token = token.access_token().secret();
        let discord_user = self.fetch_discord_user(access_token).await?;
        let guilds = self.fetch_user_guilds(access_token).await?;

        Ok(LoginResult {
            user: DashboardUser {
                id: discord_user.id.get().to_string(),
                username: discord_user.name,
                guilds,
            },
            access_token: access_token.clone(),
        })
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(&self, access_token: &str) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/@me", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }

    /// Retrieves the guilds the user is a member of, with their permissions there.
    ///
    /// Called at login and on every dashboard view so the guild list follows the
    /// user's current memberships.
    ///
    /// # Returns
    /// - `Ok(Vec<UserGuild>)` - Current guild list
    /// - `Err(AppError::ReqwestErr)` - Request failed or the token was rejected (401)
    pub async fn fetch_user_guilds(&self, access_token: &str) -> Result<Vec<UserGuild>, AppError> {
        let guilds = self
            .http_client
            .get(format!("{}/users/@me/guilds", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<UserGuild>>()
            .await?;

        Ok(guilds)
    }
}
