//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but only exposes the keys of its
//! own concern:
//! - `AuthSession` - the logged-in dashboard user and their OAuth access token
//! - `CsrfSession` - the single-use OAuth state token
//! - `FlashSession` - a one-shot message shown on the next rendered page

use tower_sessions::Session;

use crate::{error::AppError, model::discord::DashboardUser};

const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_FLASH_MESSAGE: &str = "flash:message";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user and their access token.
    ///
    /// The session id is cycled first so a session id known before login cannot be
    /// reused after it.
    ///
    /// # Returns
    /// - `Ok(())` - User stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn login(&self, user: &DashboardUser, access_token: String) -> Result<(), AppError> {
        self.session.cycle_id().await?;

        self.session.insert(SESSION_AUTH_USER, user).await?;
        self.session
            .insert(SESSION_AUTH_ACCESS_TOKEN, access_token)
            .await?;

        Ok(())
    }

    /// Retrieves the logged-in user.
    ///
    /// # Returns
    /// - `Ok(Some(DashboardUser))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user(&self) -> Result<Option<DashboardUser>, AppError> {
        let user = self.session.get::<DashboardUser>(SESSION_AUTH_USER).await?;

        Ok(user)
    }

    /// Retrieves the OAuth access token stored at login.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - User is logged in
    /// - `Ok(None)` - No token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_access_token(&self) -> Result<Option<String>, AppError> {
        let token = self
            .session
            .get::<String>(SESSION_AUTH_ACCESS_TOKEN)
            .await?;

        Ok(token)
    }

    /// Replaces the stored user, keeping the session id and access token.
    pub async fn update_user(&self, user: &DashboardUser) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;

        Ok(())
    }

    /// Removes all session data, deletes the session from the store and expires the
    /// cookie.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;

        Ok(())
    }
}

/// CSRF protection session management for the OAuth flow.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF token sent to Discord as the OAuth `state`.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token.
    ///
    /// The token is removed on read so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token was found and removed
    /// - `Ok(None)` - No token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// One-shot messages carried across a POST/redirect/GET round trip.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.session
            .insert(SESSION_FLASH_MESSAGE, message.into())
            .await?;
        Ok(())
    }

    /// Retrieves and removes the pending message.
    pub async fn take(&self) -> Result<Option<String>, AppError> {
        let message = self.session.remove(SESSION_FLASH_MESSAGE).await?;
        Ok(message)
    }
}
