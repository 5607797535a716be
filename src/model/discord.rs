//! Discord-side views used by the notifier and the dashboard.
//!
//! These are narrowed copies of serenity / OAuth payloads holding only what herald
//! reads, so services can be exercised without a live Discord connection.

use serde::{Deserialize, Serialize};
use serenity::all::{ChannelType, GuildChannel, PartialGuild, Permissions};

/// A channel of a guild as seen by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub id: u64,
    pub name: String,
    /// Whether messages can be posted (text or announcement channel).
    pub text_based: bool,
}

impl ChannelSummary {
    pub fn from_channel(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.get(),
            name: channel.name.clone(),
            text_based: matches!(channel.kind, ChannelType::Text | ChannelType::News),
        }
    }
}

/// A guild as seen by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSummary {
    pub name: String,
}

impl GuildSummary {
    pub fn from_partial_guild(guild: &PartialGuild) -> Self {
        Self {
            name: guild.name.clone(),
        }
    }
}

/// A guild entry from the OAuth `/users/@me/guilds` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGuild {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// Permission bitfield of the user in this guild, as a decimal string.
    #[serde(default)]
    pub permissions: String,
}

impl UserGuild {
    /// Returns true if the user may edit this guild's configuration.
    ///
    /// Owners always can; otherwise the user needs `ADMINISTRATOR` or `MANAGE_GUILD`.
    pub fn can_manage(&self) -> bool {
        if self.owner {
            return true;
        }

        let bits = self.permissions.parse::<u64>().unwrap_or(0);
        let permissions = Permissions::from_bits_truncate(bits);

        permissions.administrator() || permissions.manage_guild()
    }

    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|icon| format!("https://cdn.discordapp.com/icons/{}/{}.png", self.id, icon))
    }
}

/// The dashboard user stored in the session after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUser {
    pub id: String,
    pub username: String,
    /// Guild list captured from the OAuth profile at login.
    pub guilds: Vec<UserGuild>,
}

impl DashboardUser {
    /// Finds a guild in the OAuth profile that the user may manage.
    pub fn manageable_guild(&self, guild_id: &str) -> Option<&UserGuild> {
        self.guilds
            .iter()
            .find(|guild| guild.id == guild_id && guild.can_manage())
    }
}
