//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod logging;

use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication and credential settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bare (unprefixed) environment variables that override every other source.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    /// `HOST`
    pub host: Option<String>,
    /// `PORT`
    pub port: Option<String>,
    /// `SECRET_KEY`
    pub secret_key: Option<String>,
    /// `FLASK_DEBUG`
    pub debug: Option<String>,
}

impl EnvOverrides {
    /// Reads the overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the overrides through `lookup`, keyed by variable name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST"),
            port: lookup("PORT"),
            secret_key: lookup("SECRET_KEY"),
            debug: lookup("FLASK_DEBUG"),
        }
    }

    fn apply(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, AppError> {
        let port = match &self.port {
            Some(raw) => Some(i64::from(raw.trim().parse::<u16>().map_err(|e| {
                AppError::configuration(format!("Invalid PORT '{raw}': {e}"))
            })?)),
            None => None,
        };
        let debug = self
            .debug
            .as_deref()
            .map(|v| v.trim().eq_ignore_ascii_case("true"));

        Ok(builder
            .set_override_option("server.host", self.host.clone())?
            .set_override_option("server.port", port)?
            .set_override_option("server.debug", debug)?
            .set_override_option("auth.secret_key", self.secret_key.clone())?)
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Layers `config/default.toml`, `config/{env}.toml`, variables prefixed
    /// with `AGENCY__`, then the bare `HOST`/`PORT`/`SECRET_KEY`/`FLASK_DEBUG`.
    /// Every source is optional; missing values fall back to defaults.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("AGENCY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder, &EnvOverrides::from_env())
    }

    /// Finish a builder with the given overrides and deserialize it.
    pub fn build(
        builder: ConfigBuilder<DefaultState>,
        overrides: &EnvOverrides,
    ) -> Result<Self, AppError> {
        let config = overrides
            .apply(builder)?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
