use std::env;
use std::sync::OnceLock;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}")]
    Invalid(&'static str),
}

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }

        let port = match env::var("PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 3000,
        };

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,
            Err(_) => 10,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            max_connections,
        })
    }
}

// Global singleton config - installed once at startup via init()
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Load configuration from the environment and install the process-wide
/// handle. Fails when `DATABASE_URL` or `JWT_SECRET` is absent.
pub fn init() -> Result<&'static AppConfig, ConfigError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = AppConfig::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Convenience accessor. Only valid after `init()` has succeeded.
pub fn config() -> &'static AppConfig {
    CONFIG.get().expect("config::init() must run at startup")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env manipulation is process-global, so every case runs inside one test.
    #[test]
    fn from_env_parses_and_rejects() {
        env::set_var("DATABASE_URL", "postgres://localhost/quill");
        env::set_var("JWT_SECRET", "s3cret");
        env::remove_var("PORT");
        env::remove_var("DATABASE_MAX_CONNECTIONS");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://localhost/quill");
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 10);

        env::set_var("PORT", "8080");
        assert_eq!(AppConfig::from_env().unwrap().port, 8080);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::Invalid("PORT"))
        ));
        env::remove_var("PORT");

        env::set_var("JWT_SECRET", "");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));

        env::remove_var("JWT_SECRET");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
        env::set_var("JWT_SECRET", "s3cret");
    }
}
