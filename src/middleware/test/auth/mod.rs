use crate::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::discord::{DashboardUser, UserGuild},
};
use test_utils::builder::TestBuilder;

mod require;
mod require_guild;

/// Permission bitfields as Discord sends them in the OAuth guild list.
const NO_PERMISSIONS: &str = "0";
const SEND_MESSAGES: &str = "2048";
const MANAGE_GUILD: &str = "32";
const ADMINISTRATOR: &str = "8";

fn user_guild(id: &str, owner: bool, permissions: &str) -> UserGuild {
    UserGuild {
        id: id.to_string(),
        name: format!("Guild {}", id),
        icon: None,
        owner,
        permissions: permissions.to_string(),
    }
}

fn dashboard_user(guilds: Vec<UserGuild>) -> DashboardUser {
    DashboardUser {
        id: "424242".to_string(),
        username: "admin".to_string(),
        guilds,
    }
}
