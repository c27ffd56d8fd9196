//! Server configuration from environment variables.

use anyhow::Context;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Initial shuffle flag for new sessions.
    pub shuffle_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            shuffle_default: false,
        }
    }
}

impl Config {
    /// Load from the process environment (after `.env`, if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` for each variable; missing ones fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid PORT: {}", value))?,
            None => defaults.port,
        };
        let shuffle_default = match lookup("SHUFFLE_DEFAULT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid SHUFFLE_DEFAULT: {}", value))?,
            None => defaults.shuffle_default,
        };

        Ok(Self {
            host,
            port,
            shuffle_default,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
