// src/lib.rs

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod state;

use axum::Router;

use crate::{config::Config, state::AppState};

pub use routes::create_router;

/// Builds a ready-to-serve application from `config`: connects to the
/// database, applies migrations and wires the router.
pub async fn create_app(config: Config) -> Result<Router, sqlx::Error> {
    let state = AppState::build(&config).await?;
    Ok(create_router(state))
}
