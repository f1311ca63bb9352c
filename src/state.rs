// src/state.rs

use crate::{config::Config, db};
use axum::extract::FromRef;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    /// Opens the pool and brings the schema up to date.
    pub async fn build(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = db::connect(config).await?;
        tracing::info!("Database connected...");

        db::migrate(&pool).await?;

        Ok(Self { pool })
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
