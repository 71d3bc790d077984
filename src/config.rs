use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;

const DEFAULT_JWT_SECRET: &str = "fitsnap-dev-secret-change-me";

#[derive(Debug, Error)]
#[error("Invalid value for {key}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    reason: String,
}

/// Runtime configuration, read once at startup and injected into the app.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// MongoDB URI, or `memory` for the in-process store
    pub database_url: String,
    pub jwt: JwtSettings,
    pub bcrypt_cost: u32,
    pub max_upload_bytes: usize,
    pub seed_brands: bool,
    /// Empty means any origin is allowed
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            log::warn!("⚠️  JWT_SECRET not set, using the development secret");
            DEFAULT_JWT_SECRET.to_string()
        });

        let bcrypt_cost: u32 = parse(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError {
                key: "BCRYPT_COST",
                reason: format!("{} is outside 4..=31", bcrypt_cost),
            });
        }

        let ttl_hours: i64 = parse(&lookup, "JWT_TTL_HOURS", 24)?;
        if ttl_hours <= 0 {
            return Err(ConfigError {
                key: "JWT_TTL_HOURS",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse(&lookup, "PORT", 8001)?,
            database_url: lookup("MONGO_URL")
                .unwrap_or_else(|| "mongodb://localhost:27017/fitsnap".to_string()),
            jwt: JwtSettings {
                secret,
                issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "fitsnap-service".to_string()),
                audience: lookup("JWT_AUDIENCE").unwrap_or_else(|| "fitsnap-api".to_string()),
                ttl_hours,
            },
            bcrypt_cost,
            max_upload_bytes: parse(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            seed_brands: parse(&lookup, "SEED_BRANDS", true)?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == "memory"
    }
}

fn parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8001);
        assert_eq!(config.database_url, "mongodb://localhost:27017/fitsnap");
        assert_eq!(config.jwt.ttl_hours, 24);
        assert!(config.seed_brands);
        assert!(config.cors_allowed_origins.is_empty());
        assert!(!config.uses_memory_store());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("MONGO_URL", "memory"),
            ("SEED_BRANDS", "false"),
            ("BCRYPT_COST", "4"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, http://127.0.0.1:3000,"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert!(config.uses_memory_store());
        assert!(!config.seed_brands);
        assert_eq!(config.bcrypt_cost, 4);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("BCRYPT_COST", "2")]).is_err());
        assert!(config_from(&[("JWT_TTL_HOURS", "0")]).is_err());
    }
}
