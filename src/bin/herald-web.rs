use dioxus_logger::tracing;
use serenity::all::Http;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use herald::{config::WebConfig, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = WebConfig::from_env()?;
    startup::init_logger(config.log_level)?;

    let db = startup::connect_to_database(&config.database_url).await?;
    let (session, deletion_task) = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let discord = Arc::new(Http::new(&config.discord_bot_token));

    let state = AppState::new(
        db.clone(),
        http_client,
        oauth_client,
        config.discord_api_url.clone(),
        discord,
    );

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Dashboard listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    deletion_task.abort();
    db.close().await?;
    tracing::info!("Dashboard stopped");

    Ok(())
}
