//! Schema CLI for the catalog tables.
//!
//! `DATABASE_URL=sqlite://catalog.db?mode=rwc migration up` creates the
//! `users` and `products` tables; `status`, `down` and `fresh` are also available.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
