//! Herald: a Discord bot for welcome messages and invite logs, with a web dashboard
//! for configuring it per guild.
//!
//! Two binaries share this library and one SQLite configuration store:
//!
//! - `herald-bot` - connects to the Discord gateway and posts embeds when members join
//!   or invites are created
//! - `herald-web` - server-rendered dashboard where guild managers log in with Discord
//!   and edit their guild's settings
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Discord gateway event handlers
//! - **Controller Layer** (`controller/`) - HTTP request handlers and form parsing
//! - **Service Layer** (`service/`) - Validation, notifications, OAuth and Discord lookups
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **View** (`view/`) - Dioxus components rendered to HTML on the server
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and authorization guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration per binary
//! - **State** (`state`) - Shared dashboard state (DB, HTTP clients, Discord gateway)
//! - **Startup** (`startup`) - Logger, database, session and client initialization
//! - **Router** (`router`) - Axum route configuration

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod view;
