use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, InviteCreateEvent, Member, Ready};
use serenity::async_trait;

pub mod invite;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Accent color of welcome embeds.
    pub welcome_color: u32,
}

impl Handler {
    pub fn new(db: DatabaseConnection, welcome_color: u32) -> Self {
        Self { db, welcome_color }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, self.welcome_color, ctx, new_member)
            .await;
    }

    /// Called when an invite is created in a guild
    async fn invite_create(&self, ctx: Context, data: InviteCreateEvent) {
        invite::handle_invite_create(&self.db, ctx, data).await;
    }
}
