//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields
//! they care about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Defaults: unique guild id, every setting unset
//! let config = factory::create_guild_configuration(&db).await?;
//!
//! // Customized
//! let config = factory::guild_configuration::GuildConfigurationFactory::new(&db)
//!     .guild_id("123456789")
//!     .welcome_message("Hi {user}")
//!     .welcome_channel_id("555")
//!     .build()
//!     .await?;
//! ```

pub mod guild_configuration;
pub mod helpers;

pub use guild_configuration::create_guild_configuration;
