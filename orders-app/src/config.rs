//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub gateway_approval_rate: f64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let gateway_approval_rate = env::var("GATEWAY_APPROVAL_RATE")
            .unwrap_or_else(|_| "0.8".to_string())
            .parse()?;

        Ok(Self {
            port,
            gateway_approval_rate,
        })
    }
}
