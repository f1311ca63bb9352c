// src/main.rs

use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_api::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    // File logging is skipped in test mode; the guard must outlive the server.
    let (file_layer, _guard) = if config.test_mode {
        (None, None)
    } else {
        let file_appender = tracing_appender::rolling::daily(&config.log_dir, "trivia.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .boxed();
        (Some(layer), Some(guard))
    };

    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let addr = config.bind_addr;

    // Connect, migrate and build the router
    let app = trivia_api::create_app(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        e
    })?;

    // Bind to the listening address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
