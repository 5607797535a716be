//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer stays independent of the database schema. This is the only layer that
//! issues queries.

pub mod guild_configuration;

#[cfg(test)]
mod test;
