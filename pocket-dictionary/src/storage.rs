use sqlx::{
    migrate::{MigrateDatabase, MigrateError},
    query, query_scalar,
    sqlite::SqlitePoolOptions,
    Pool, Sqlite,
};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to migrate the database: {0}")]
    Migrate(#[from] MigrateError),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Small on-device key-value store kept in sqlite.
#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn initialize(db_url: &str) -> Result<Self, StorageError> {
        // every in-memory connection is its own database, so keep exactly one alive
        let in_memory = db_url.contains(":memory:");
        if !in_memory && !Sqlite::database_exists(db_url).await.unwrap_or(false) {
            Sqlite::create_database(db_url).await?;
        }
        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 4 })
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(db_url)
            .await?;
        sqlx::migrate!().run(&pool).await?;
        tracing::debug!(db_url, "storage ready");
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Storage {
    pub async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = query_scalar::<_, String>("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    /// Inserts or replaces the value stored under `key`
    pub async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        query(
            "INSERT INTO kv(key, value) VALUES(?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
