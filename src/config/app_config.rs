use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::domain::DomainError;

/// One week
const MAX_IDLE_TIMEOUT_MINUTES: u64 = 7 * 24 * 60;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// The single operator login and the session idle window
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub idle_timeout_minutes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "12345".to_string(),
            display_name: "Admin".to_string(),
            idle_timeout_minutes: 30,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("display_name", &self.display_name)
            .field("idle_timeout_minutes", &self.idle_timeout_minutes)
            .finish()
    }
}

impl AuthConfig {
    pub fn idle_window(&self) -> chrono::Duration {
        let minutes = self.idle_timeout_minutes.min(MAX_IDLE_TIMEOUT_MINUTES);
        chrono::Duration::minutes(minutes as i64)
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, DomainError> {
        let ip = self.host.parse::<IpAddr>().map_err(|e| {
            DomainError::configuration(format!("Invalid server.host '{}': {}", self.host, e))
        })?;

        Ok(SocketAddr::from((ip, self.port)))
    }
}

impl AppConfig {
    /// Load `config/default`, `config/local`, `APP__*` variables and `PORT`
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), DomainError> {
        self.server.socket_addr()?;

        if self.auth.username.trim().is_empty() {
            return Err(DomainError::configuration("auth.username cannot be empty"));
        }

        if self.auth.password.is_empty() {
            return Err(DomainError::configuration("auth.password cannot be empty"));
        }

        if self.auth.idle_timeout_minutes == 0 {
            return Err(DomainError::configuration(
                "auth.idle_timeout_minutes must be greater than zero",
            ));
        }

        if self.auth.idle_timeout_minutes > MAX_IDLE_TIMEOUT_MINUTES {
            return Err(DomainError::configuration(format!(
                "auth.idle_timeout_minutes cannot exceed {}",
                MAX_IDLE_TIMEOUT_MINUTES
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(DomainError::configuration("logging.level cannot be empty"));
        }

        Ok(())
    }
}
