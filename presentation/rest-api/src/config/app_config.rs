use poem::middleware::Cors;

use super::catalog_config::CatalogConfig;
use super::cors_config;
use super::server_config::ServerConfig;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env(),
        }
    }
}
