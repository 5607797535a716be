use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::discord::{DashboardUser, UserGuild},
};

/// Access checks for dashboard routes.
///
/// Decisions are made from the session alone; the configuration store is never read
/// before a request is authorized.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(DashboardUser)` - The user in the session
    /// - `Err(AuthError::Unauthenticated)` - Nobody is logged in
    pub async fn require(&self) -> Result<DashboardUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::Unauthenticated.into());
        };

        Ok(user)
    }

    /// Requires a logged-in user who may manage `guild_id`.
    ///
    /// The guild must be in the user's OAuth guild list and the user must own it or
    /// hold administrator or manage-server permission there.
    ///
    /// # Returns
    /// - `Ok((DashboardUser, UserGuild))` - User and the matching guild entry
    /// - `Err(AuthError::Unauthenticated)` - Nobody is logged in
    /// - `Err(AuthError::GuildAccessDenied)` - Guild not manageable by the user
    pub async fn require_guild(
        &self,
        guild_id: &str,
    ) -> Result<(DashboardUser, UserGuild), AppError> {
        let user = self.require().await?;

        let Some(guild) = user.manageable_guild(guild_id).cloned() else {
            return Err(AuthError::GuildAccessDenied {
                user_id: user.id.clone(),
                guild_id: guild_id.to_string(),
            }
            .into());
        };

        Ok((user, guild))
    }
}
