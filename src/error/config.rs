use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables each binary needs.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    /// The schema has migrations that were not applied yet.
    ///
    /// Run `cargo run -p migration -- up` against the same `DATABASE_URL` first.
    #[error("Database has {0} pending migration(s); run the migration step before starting")]
    PendingMigrations(usize),

    /// The session store could not be prepared.
    #[error("Failed to set up session store: {0}")]
    SessionStore(String),

    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(String),
}
