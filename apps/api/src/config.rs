use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated; everything else is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// PostgreSQL connection string. Unset disables the database probe.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            database_url: non_empty(var("DATABASE_URL")),
            database_name: non_empty(var("DATABASE_NAME")),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
        assert!(config.database_url.is_none());
        assert!(config.database_name.is_none());
    }

    #[test]
    fn test_reads_all_vars() {
        let config = config_from(&[
            ("PORT", "9001"),
            ("RUST_LOG", "debug"),
            ("DATABASE_URL", "postgres://localhost/clarity"),
            ("DATABASE_NAME", "clarity"),
        ])
        .unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/clarity")
        );
        assert_eq!(config.database_name.as_deref(), Some("clarity"));
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_blank_database_url_treated_as_unset() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }
}
