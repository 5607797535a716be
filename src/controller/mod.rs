//! HTTP handlers of the configuration dashboard.
//!
//! Every guild-scoped handler runs `AuthGuard` before touching the configuration
//! store. POST handlers always answer with a 303 redirect to a GET page; validation
//! problems travel there as a flash message.

pub mod auth;
pub mod dashboard;
pub mod settings;
