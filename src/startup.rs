//! Process setup shared by `herald-bot` and `herald-web`.

use dioxus_logger::tracing::{self, Level};
use migration::{Migrator, MigratorTrait};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tokio::task::JoinHandle;
use tower_sessions::{
    cookie::Key, service::SignedCookie, session_store::ExpiredDeletion, Expiry,
    SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::WebConfig,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Sessions expire after this long without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// How often expired sessions are purged from the store.
const EXPIRED_SESSION_SWEEP: std::time::Duration = std::time::Duration::from_secs(60 * 60);

pub type SessionLayer = SessionManagerLayer<SqliteStore, SignedCookie>;

/// Installs the global tracing subscriber at the configured level.
pub fn init_logger(level: Level) -> Result<(), AppError> {
    dioxus_logger::init(level).map_err(|e| ConfigError::Logger(e.to_string()))?;

    Ok(())
}

/// Connects to the SQLite database and checks the schema is current.
///
/// Migrations are not applied here; they are a separate step (`migration up`). A
/// process refuses to start against a database with pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with an up-to-date schema
/// - `Err(AppError::StoreUnavailable)` - Could not connect
/// - `Err(AppError::ConfigErr(PendingMigrations))` - Schema is behind
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    let pending = Migrator::get_pending_migrations(&db).await?;
    if !pending.is_empty() {
        return Err(ConfigError::PendingMigrations(pending.len()).into());
    }

    Ok(db)
}

/// Sets up the session store in the application database.
///
/// Creates the session table if needed and spawns a task deleting expired sessions.
/// The returned handle lets `main` stop that task on shutdown.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &WebConfig,
) -> Result<(SessionLayer, JoinHandle<()>), AppError> {
    let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    session_store
        .migrate()
        .await
        .map_err(|e| ConfigError::SessionStore(e.to_string()))?;

    let deletion_store = session_store.clone();
    let deletion_task = tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(EXPIRED_SESSION_SWEEP)
            .await
        {
            tracing::error!("Expired session cleanup stopped: {}", e);
        }
    });

    let layer = session_layer(session_store, &config.session_secret, config.secure_cookies)?;

    Ok((layer, deletion_task))
}

/// Builds the signed-cookie session layer over a store.
pub fn session_layer(
    session_store: SqliteStore,
    secret: &str,
    secure: bool,
) -> Result<SessionLayer, AppError> {
    let key = Key::try_from(secret.as_bytes()).map_err(|e| ConfigError::InvalidEnvVar {
        name: "SESSION_SECRET".to_string(),
        reason: e.to_string(),
    })?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            SESSION_INACTIVITY_DAYS,
        )))
        .with_signed(key))
}

/// Creates the HTTP client for Discord user API calls.
///
/// Redirects are disabled so a response can never bounce the client elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the Discord OAuth2 client from configuration.
pub fn setup_oauth_client(config: &WebConfig) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|e| invalid_url("DISCORD_AUTH_URL", e))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|e| invalid_url("DISCORD_TOKEN_URL", e))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|e| invalid_url("DISCORD_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    }
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
