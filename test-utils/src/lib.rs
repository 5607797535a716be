//! Herald Test Utils
//!
//! Provides shared testing utilities for the herald bot and dashboard. This crate offers
//! a builder pattern for creating test contexts with in-memory SQLite databases, an
//! in-memory session, and factories for seeding guild configuration rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildConfiguration;
//!
//! #[tokio::test]
//! async fn reads_configuration() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildConfiguration)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
