use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP
/// server. Layers:
/// - config/: server, CORS, and catalog seed configuration
/// - setup/: dependency injection and server setup
/// - api/: route handlers and DTOs
///
/// The catalog lives only in memory: it is seeded once here from the
/// configured JSON file and every mutation vanishes on restart.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Seed the catalog (missing/unreadable file degrades to empty)
    let initial_products = storage::seed::load_products(&config.catalog.products_path);

    // 5. Wire dependencies around the one long-lived store instance
    let container = DependencyContainer::new(initial_products);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
