//! Environment-based configuration

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

/// Runtime configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Exact origin allowed by CORS; any origin when unset
    pub frontend_origin: Option<String>,
    /// Populate the catalog with demo data on startup
    pub seed: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("HOST", "0.0.0.0"),
            port: try_load("PORT", "5000"),
            frontend_origin: env::var("FRONTEND_URL").ok().filter(|v| !v.is_empty()),
            seed: try_load("SEED", "false"),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
                .parse()
                .unwrap_or_else(|e| panic!("default for {key} must parse: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            frontend_origin: None,
            seed: false,
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
