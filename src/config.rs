use std::collections::HashMap;
use std::env;
use std::time::Duration;
use anyhow::{Context, Result};

/// Key under which the Postgres connection string is resolved.
pub const DATABASE_URL_KEY: &str = "DATABASE_URL";

/// Source of process-wide configuration values.
///
/// The recommendation handler receives one at construction instead of reading
/// the environment inline, so tests can swap in a `StaticConfig`.
pub trait ConfigProvider: Send + Sync {
    /// Raw lookup. `None` when the key is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Lookup that treats empty or whitespace-only values as unset.
    fn resolve(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn database_url(&self) -> Option<String> {
        self.resolve(DATABASE_URL_KEY)
    }
}

/// Reads from the process environment, after loading `.env` if one exists.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig;

impl EnvConfig {
    pub fn new() -> Self {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();
        EnvConfig
    }
}

impl ConfigProvider for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Fixed key/value configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn with_database_url(self, url: impl Into<String>) -> Self {
        self.with(DATABASE_URL_KEY, url)
    }
}

impl ConfigProvider for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Settings for the local HTTP server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: Environment,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_provider(&EnvConfig::new())
    }

    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self> {
        let port = provider
            .resolve("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let environment = match provider
            .resolve("ENV")
            .unwrap_or_else(|| "local".to_string())
            .as_str()
        {
            "production" | "prod" => Environment::Production,
            _ => Environment::Local,
        };

        let timeout_secs = provider
            .resolve("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a valid number of seconds")?;

        let config = ServerConfig {
            port,
            environment,
            request_timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}
