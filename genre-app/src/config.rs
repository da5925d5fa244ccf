//! Environment-backed configuration for the genre server.

use std::env;

/// Fallback when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// Runtime settings, read once at startup.
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads `PORT` (optional) and `DATABASE_URL` (required) from the
    /// environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(env::var("PORT").ok(), env::var("DATABASE_URL").ok())
    }

    fn from_vars(port: Option<String>, database_url: Option<String>) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        if port == 0 {
            anyhow::bail!("PORT must be non-zero");
        }

        let database_url = database_url
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        Ok(Self { port, database_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_url() -> Option<String> {
        Some("sqlite://genres.db?mode=rwc".to_string())
    }

    #[test]
    fn test_port_defaults_when_unset() {
        let config = Config::from_vars(None, db_url()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_explicit_port_is_parsed() {
        let config = Config::from_vars(Some("8080".to_string()), db_url()).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_non_numeric_port_fails() {
        let result = Config::from_vars(Some("not-a-port".to_string()), db_url());
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_port_fails() {
        let result = Config::from_vars(Some("0".to_string()), db_url());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_database_url_fails() {
        let result = Config::from_vars(None, None);
        assert!(result.is_err());
    }
}
