use tracing::info;

use corkboard::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = corkboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        corkboard::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    info!("corkboard - anonymous message board backend");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    let server = WebServer::new(&config.server, db);
    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {e}");
        std::process::exit(1);
    }
}
