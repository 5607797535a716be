use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::BotConfig, error::AppError};

/// Gateway events the bot subscribes to.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_INVITES
}

/// Builds the Discord client without connecting.
///
/// The caller starts it with `Client::start` and keeps `client.shard_manager` to shut
/// the gateway connection down.
///
/// # Arguments
/// - `config` - Bot configuration with token and embed color
/// - `db` - Configuration store connection
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError)` - Token rejected by the client builder
pub async fn init_bot(config: &BotConfig, db: DatabaseConnection) -> Result<Client, AppError> {
    let handler = Handler::new(db, config.welcome_embed_color);

    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the bot until the gateway connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribes_to_member_and_invite_events() {
        let intents = intents();

        assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
        assert!(intents.contains(GatewayIntents::GUILD_INVITES));
        assert!(intents.contains(GatewayIntents::GUILDS));
        assert!(!intents.contains(GatewayIntents::MESSAGE_CONTENT));
    }
}
