use campaign_core::error::CoreError;

/// Error type for repository write paths and setup.
///
/// Read paths return `sqlx::Error` directly; writes validate first and can
/// also fail with a domain error.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error (validation failure, missing row on update).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from sqlx, propagated unmodified.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type DbResult<T> = Result<T, DbError>;
