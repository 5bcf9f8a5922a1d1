//! Repository layer for database operations

pub mod books;

use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite, SqliteConnection,
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
}

/// A storage session scoped to a single request.
///
/// Holds one pooled connection; it goes back to the pool when the session
/// is dropped, whichever way the request ends.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open the pool described by `config`, creating the database file if needed
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        // In-memory databases live as long as their connection, so never recycle idle ones.
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Apply embedded migrations
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Acquire a session for the current request
    pub async fn session(&self) -> AppResult<Session> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }
}

impl Session {
    fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}
