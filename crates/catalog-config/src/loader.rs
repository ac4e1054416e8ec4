//! Configuration loader with layered sources.

use crate::{AppConfig, StorageBackend};
use catalog_core::CatalogError;
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Flat text variables accepted for compatibility with existing
/// deployments, mapped to their configuration key.
const LEGACY_TEXT_KEYS: [(&str, &str); 7] = [
    ("APP_ENV", "app.environment"),
    ("DB_DSN", "database.url"),
    ("HTTP_PORT", "server.port"),
    ("BASIC_AUTH_USER", "security.basic_auth_user"),
    ("BASIC_AUTH_PASS", "security.basic_auth_pass"),
    ("REDIS_ADDR", "redis.addr"),
    ("REDIS_PASSWORD", "redis.password"),
];

/// Configuration loaded once at process start.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Uncommitted developer overrides
    /// 4. Environment variables with `CATALOG__` prefix
    /// 5. Flat variables such as `DB_DSN` and `HTTP_PORT`
    pub fn new(config_dir: &str) -> Result<Self, CatalogError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let env: HashMap<String, String> = std::env::vars().collect();
        let config = Self::load_config(config_dir, &env)?;

        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, CatalogError> {
        Self::new("./config")
    }

    /// Consumes the loader, returning the loaded configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Loads configuration from `config_dir` with an explicit environment.
    pub fn load_config(
        config_dir: &str,
        env: &HashMap<String, String>,
    ) -> Result<AppConfig, CatalogError> {
        let environment = env
            .get("CATALOG_ENVIRONMENT")
            .or_else(|| env.get("APP_ENV"))
            .cloned()
            .unwrap_or_else(|| "local".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("CATALOG")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone())),
        );

        let app_config: AppConfig = apply_legacy_env(builder, env)
            .map_err(config_error_to_catalog_error)?
            .build()
            .map_err(config_error_to_catalog_error)?
            .try_deserialize()
            .map_err(config_error_to_catalog_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), CatalogError> {
        if config.database.backend == StorageBackend::Postgres && config.database.url.is_empty() {
            return Err(CatalogError::Configuration("Database URL is required".to_string()));
        }

        if config.server.port == 0 {
            return Err(CatalogError::Configuration("HTTP port must be non-zero".to_string()));
        }

        if config.security.basic_auth_user.is_empty() {
            return Err(CatalogError::Configuration(
                "Basic auth user must not be empty".to_string(),
            ));
        }

        if config.app.environment != "local" && config.security.uses_default_credentials() {
            warn!("Using default Basic auth credentials outside local! This is a security risk.");
        }

        Ok(())
    }
}

/// Overlays the flat variables. `REDIS_ENABLED` and `REDIS_DB` are parsed
/// leniently: an unparsable value is ignored and the lower layers win.
fn apply_legacy_env(
    mut builder: ConfigBuilder<DefaultState>,
    env: &HashMap<String, String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (var, key) in LEGACY_TEXT_KEYS {
        builder = builder.set_override_option(key, env.get(var).cloned())?;
    }

    let enabled = lenient(env, "REDIS_ENABLED", parse_flag);
    let db = lenient(env, "REDIS_DB", |raw| raw.parse::<u32>().ok().map(i64::from));

    builder
        .set_override_option("redis.enabled", enabled)?
        .set_override_option("redis.db", db)
}

fn lenient<T>(
    env: &HashMap<String, String>,
    var: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = env.get(var)?;
    let parsed = parse(raw);
    if parsed.is_none() {
        warn!("Ignoring unparsable {}={:?}", var, raw);
    }
    parsed
}

/// Accepts the usual spellings of a boolean flag.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn config_error_to_catalog_error(err: ConfigError) -> CatalogError {
    CatalogError::Configuration(err.to_string())
}
