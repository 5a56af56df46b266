use std::net::SocketAddr;

use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
}

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: format!("{:?} is not a valid socket address", listen_addr),
            })?;

        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            listen_addr,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
