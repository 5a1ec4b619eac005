//! Application configuration management.
//!
//! Provides typed configuration loaded from environment variables with validation.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub bind_address: String,

    /// Server port to bind to
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8085,
        }
    }
}

/// Configuration loading error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration error for '{}': {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIND_ADDRESS`: Address to bind to (default: 0.0.0.0)
    /// - `PORT`: Server port (default: 8085)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_env_or("PORT", 8085)?;

        let config = Self { bind_address, port };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError {
                field: "BIND_ADDRESS".to_string(),
                message: "Cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Parse an environment variable or return a default value.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(val) => val.parse().map_err(|_| ConfigError {
            field: name.to_string(),
            message: format!("Invalid value '{}', expected a valid number", val),
        }),
        Err(_) => Ok(default),
    }
}
