use std::time::Duration;

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityName, EntityTrait, Schema};

use crate::config::DatabaseConfig;
use crate::constants::{IN_MEMORY_DATABASE_URL, LOG_SCHEMA_READY};
use crate::entities::{Evento, Localidade, Ocorrencia, Postagem, Usuario};

/// Pooled handle to the SafeAlert database
#[derive(Clone, Debug)]
pub struct Storage {
    pub conn: DatabaseConnection,
}

impl Storage {
    /// Connect to the configured database and make sure every table exists
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let max_connections = if is_in_memory(&config.url) {
            // Every in-memory connection is a separate database
            1
        } else {
            config.max_connections
        };

        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", config.url))?;

        let storage = Storage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Fresh in-memory database, used by tests
    pub async fn in_memory() -> Result<Self> {
        let config = DatabaseConfig {
            url: IN_MEMORY_DATABASE_URL.to_string(),
            max_connections: 1,
        };
        Self::new(&config).await
    }

    /// Initialize database schema
    ///
    /// Parents are created before children so the foreign keys resolve.
    async fn init_schema(&self) -> Result<()> {
        // SQLite only enforces foreign keys when asked to
        self.conn
            .execute_unprepared("PRAGMA foreign_keys = ON")
            .await
            .context("Failed to enable foreign keys")?;

        self.create_table(Usuario).await?;
        self.create_table(Localidade).await?;
        self.create_table(Evento).await?;
        self.create_table(Postagem).await?;
        self.create_table(Ocorrencia).await?;

        log::info!("{}", LOG_SCHEMA_READY);
        Ok(())
    }

    async fn create_table<E>(&self, entity: E) -> Result<()>
    where
        E: EntityTrait,
    {
        let table = entity.table_name().to_owned();
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut statement = schema.create_table_from_entity(entity);
        statement.if_not_exists();

        self.conn
            .execute(backend.build(&statement))
            .await
            .with_context(|| format!("Failed to create table {}", table))?;
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
