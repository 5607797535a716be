pub use super::guild_configuration::Entity as GuildConfiguration;
