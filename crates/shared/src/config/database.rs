use anyhow::{Context, Result};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Pool size comes from `Config` so deployments can tune it per
    /// instance instead of recompiling.
    pub async fn new_pool(connection_string: &str, max_connections: u32) -> Result<ConnectionPool> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(connection_string)
            .await
            .context("Failed to create database connection pool")
    }
}
