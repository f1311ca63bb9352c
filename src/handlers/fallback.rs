// src/handlers/fallback.rs

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Catches every path that has no route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri))
}

/// Catches known paths requested with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not allowed on {}", method, uri))
}
