//! SeaORM entities for the herald configuration store.

pub mod prelude;

pub mod guild_configuration;
