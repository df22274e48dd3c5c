use crate::error::DbError;

const DEFAULT_DATABASE_URL: &str = "sqlite://campaign.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Database configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Connection URL (default: `sqlite://campaign.db?mode=rwc`).
    pub database_url: String,
    /// Pool size (default: `5`).
    pub max_connections: u32,
    /// Seconds to wait for a free connection (default: `30`).
    pub acquire_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl DbConfig {
    /// Load configuration from the process environment, reading `.env` if present.
    ///
    /// | Env Var                   | Default                         |
    /// |---------------------------|---------------------------------|
    /// | `DATABASE_URL`            | `sqlite://campaign.db?mode=rwc` |
    /// | `DB_MAX_CONNECTIONS`      | `5`                             |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`                            |
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(DbError::Config(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        let acquire_timeout_secs = parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout_secs,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, DbError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| DbError::Config(format!("{key} must be a valid number: {e}"))),
        None => Ok(default),
    }
}
