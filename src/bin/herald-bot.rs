use dioxus_logger::tracing;

use herald::{bot, config::BotConfig, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = BotConfig::from_env()?;
    startup::init_logger(config.log_level)?;

    let db = startup::connect_to_database(&config.database_url).await?;

    let client = bot::start::init_bot(&config, db.clone()).await?;
    let shard_manager = client.shard_manager.clone();

    tokio::select! {
        result = bot::start::start_bot(client) => {
            if let Err(e) = result {
                tracing::error!("Discord bot error: {}", e);
            }
        }
        _ = startup::shutdown_signal() => {
            shard_manager.shutdown_all().await;
        }
    }

    db.close().await?;
    tracing::info!("Bot stopped");

    Ok(())
}
