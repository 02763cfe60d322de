use std::{env, net::SocketAddr};

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_BIND_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_port = lookup("BIND_PORT")
            .map(|value| {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort)
            })
            .transpose()?
            .unwrap_or(DEFAULT_BIND_PORT);

        let config = Self {
            bind_addr,
            bind_port,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn parse_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).expect("config should parse");
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.bind_port, 3000);
    }

    #[test]
    fn explicit_values_are_used() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDR", "0.0.0.0"),
            ("BIND_PORT", "8081"),
        ]))
        .expect("config should parse");

        assert_eq!(
            config.bind_socket().expect("valid socket"),
            "0.0.0.0:8081".parse().expect("socket literal")
        );
    }

    #[test]
    fn invalid_port_fails() {
        let err = Config::from_lookup(lookup_from(&[("BIND_PORT", "99999")]))
            .expect_err("expected invalid port error");
        assert!(matches!(err, ConfigError::InvalidPort));
    }

    #[test]
    fn invalid_address_fails() {
        let err = Config::from_lookup(lookup_from(&[("BIND_ADDR", "not an address")]))
            .expect_err("expected invalid socket error");
        assert!(matches!(err, ConfigError::InvalidSocket));
    }
}
