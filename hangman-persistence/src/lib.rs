pub mod connection;
pub mod entities;
pub mod repositories;
pub mod word_files;

pub use repositories::{PlayerRepository, SessionRepository};

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Owns the database connection and hands out repositories over it.
pub struct DatabaseManager {
    connection: DatabaseConnection,
}

impl DatabaseManager {
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let connection = Database::connect(database_url).await?;
        Ok(Self { connection })
    }

    /// Connect and bring the schema up to date in one step.
    pub async fn open(database_url: &str) -> Result<Self, DbErr> {
        let connection = connection::connect_and_migrate(database_url).await?;
        Ok(Self { connection })
    }

    /// Bring the schema up to date.
    pub async fn migrate(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub fn players(&self) -> PlayerRepository {
        PlayerRepository::new(self.connection.clone())
    }

    pub fn sessions(&self) -> SessionRepository {
        SessionRepository::new(self.connection.clone())
    }
}
