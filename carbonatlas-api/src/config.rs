/// Configuration for the API server
///
/// Loaded from environment variables at startup. A `.env` file in the
/// working directory is honored in development via `dotenvy`.

use std::env;

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Database settings
    pub database: DatabaseConfig,

    /// Authentication settings
    pub auth: AuthConfig,

    /// Geocoding provider settings
    pub geocoding: GeocodingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address, e.g. "0.0.0.0"
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Allowed CORS origins; empty means same-origin only
    pub cors_origins: Vec<String>,
}

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum pool connections
    pub max_connections: u32,
}

/// Authentication settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for signing access tokens
    pub jwt_secret: String,

    /// Token lifetime in hours
    pub token_expiration_hours: i64,
}

/// Geocoding provider settings
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// API key for the geocoding provider
    pub api_key: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Required variables: `DATABASE_URL`, `JWT_SECRET`, `GEOCODING_API_KEY`.
    /// Optional: `API_HOST` (default "0.0.0.0"), `API_PORT` (default 8080),
    /// `CORS_ORIGINS` (comma-separated), `DATABASE_MAX_CONNECTIONS`
    /// (default 10), `TOKEN_EXPIRATION_HOURS` (default 24).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is absent, a numeric
    /// variable fails to parse, or the JWT secret is shorter than 32 bytes.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("API_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "API_PORT".to_string(),
                message: format!("'{}' is not a valid port number", raw),
            })?,
            Err(_) => 8080,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let database_url = required_var("DATABASE_URL")?;
        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                message: format!("'{}' is not a valid connection count", raw),
            })?,
            Err(_) => 10,
        };

        let jwt_secret = required_var("JWT_SECRET")?;
        if jwt_secret.len() < 32 {
            return Err(ConfigError::InvalidValue {
                var: "JWT_SECRET".to_string(),
                message: "must be at least 32 bytes".to_string(),
            });
        }

        let token_expiration_hours = match env::var("TOKEN_EXPIRATION_HOURS") {
            Ok(raw) => raw.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: "TOKEN_EXPIRATION_HOURS".to_string(),
                message: format!("'{}' is not a valid hour count", raw),
            })?,
            Err(_) => 24,
        };

        let api_key = required_var("GEOCODING_API_KEY")?;

        Ok(Config {
            server: ServerConfig {
                host,
                port,
                cors_origins,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            auth: AuthConfig {
                jwt_secret,
                token_expiration_hours,
            },
            geocoding: GeocodingConfig { api_key },
        })
    }

    /// Socket address string for binding the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
