//! Domain models shared by the bot and the dashboard.
//!
//! Repositories convert entity models into these types at the data-layer boundary so
//! services never depend on SeaORM entities directly.

pub mod discord;
pub mod guild_configuration;
pub mod notification;
