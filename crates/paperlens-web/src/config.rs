//! Configuration from the environment (with `.env` support in main).

use std::net::SocketAddr;
use std::time::Duration;

use paperlens_common::error::{PaperlensError, Result};

const DEFAULT_BIND: &str = "127.0.0.1:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search/analysis backend.
    pub backend_url: String,
    pub bind: SocketAddr,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let backend_url = std::env::var("PAPERLENS_BACKEND_URL")
            .map_err(|_| PaperlensError::Config("PAPERLENS_BACKEND_URL is not set".into()))?;

        let bind = parse_bind(
            &std::env::var("PAPERLENS_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
        )?;

        let http_timeout = match std::env::var("PAPERLENS_HTTP_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse().map_err(|_| {
                PaperlensError::Config(format!(
                    "PAPERLENS_HTTP_TIMEOUT_SECS must be a number of seconds, got {raw:?}"
                ))
            })?),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            backend_url,
            bind,
            http_timeout,
        })
    }
}

fn parse_bind(raw: &str) -> Result<SocketAddr> {
    raw.parse()
        .map_err(|_| PaperlensError::Config(format!("invalid PAPERLENS_BIND address {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_parses_host_and_port() {
        assert_eq!(
            parse_bind("0.0.0.0:8080").unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
        assert!(parse_bind("not-an-address").is_err());
    }
}
