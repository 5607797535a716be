//! Business logic between the entry points (bot handlers, web controllers) and the
//! data layer.

pub mod auth;
pub mod discord;
pub mod guild_configuration;
pub mod notifier;
