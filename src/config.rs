// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

const DEFAULT_DATABASE_URL: &str = "sqlite://trivia.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,

    /// Keeps a single pooled connection alive for the app's lifetime so an
    /// in-memory database is shared by every request.
    pub test_mode: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|addr| match addr.parse() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    eprintln!("Ignoring invalid BIND_ADDR '{}': {}", addr, e);
                    None
                }
            })
            .unwrap_or_else(default_bind_addr);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let test_mode = env::var("TEST_MODE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            database_url,
            bind_addr,
            rust_log,
            log_dir,
            test_mode,
        }
    }

    /// Configuration backed by a fresh in-memory database.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            rust_log: "error".to_string(),
            log_dir: "logs".to_string(),
            test_mode: true,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    DEFAULT_BIND_ADDR
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 3000)))
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_truthy_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_config_uses_in_memory_database() {
        let config = Config::for_tests();
        assert!(config.test_mode);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 0);
    }
}
