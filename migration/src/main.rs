use sea_orm_migration::prelude::*;

// Reads DATABASE_URL; subcommands: up | down | fresh | refresh | reset | status
#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
