//! Server configuration from environment variables (after `.env` is loaded by the binary).

use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
pub const DEFAULT_SCHEMA: &str = "public";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// PostgreSQL URL. When unset the server runs on the in-memory store.
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub max_connections: u32,
    pub max_body_bytes: usize,
    /// PostgreSQL schema holding the developers table.
    pub schema: String,
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS`, `MAX_BODY_BYTES`, `DEVS_SCHEMA`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Ok(ServerConfig {
            database_url: get("DATABASE_URL"),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            max_body_bytes: parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), DEFAULT_MAX_BODY_BYTES)?,
            schema: get("DEVS_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(cfg.schema, DEFAULT_SCHEMA);
    }

    #[test]
    fn values_are_read_and_blank_means_unset() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://localhost/devs"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("MAX_BODY_BYTES", "  "),
            ("DEVS_SCHEMA", "registry"),
        ])
        .unwrap();
        assert_eq!(cfg.schema, "registry");
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/devs"));
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000");
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        let err = config(&[("DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DB_MAX_CONNECTIONS", .. }));
    }
}
