//! Server startup utilities.

use catalog_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
     ___         _        _
    / __|__ _ __| |_ __ _| |___  __ _
   | (__/ _` / _|  _/ _` | / _ \/ _` |
    \___\__,_\__|\__\__,_|_\___/\__, |
                                |___/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let base = format!("http://{}", config.server.addr());
    info!("{}", separator);
    info!("Products:  {}/products", base);
    info!("Store:     {}", config.database.backend);
    if config.redis.enabled {
        info!("Cache:     redis://{}/{}", config.redis.addr, config.redis.db);
    } else {
        info!("Cache:     disabled");
    }
    info!("{}", separator);
}
