use sea_orm_migration::prelude::*;

/// Applies or inspects the herald schema.
///
/// Reads `DATABASE_URL` from the environment, e.g. `cargo run -p migration -- up`.
#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
