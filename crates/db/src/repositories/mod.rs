//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. Every entity exposes the
//! same shape: `insert`, `load`, `store`, `delete`, `list`, `list_ids`,
//! and `list_reference`.

pub mod campaign_repo;
pub mod phase_repo;
pub mod theme_repo;

pub use campaign_repo::CampaignRepo;
pub use phase_repo::PhaseRepo;
pub use theme_repo::ThemeRepo;

use campaign_core::error::CoreError;
use campaign_core::reference::ReferenceList;
use campaign_core::types::DbId;
use campaign_core::validation::{self, FieldRule};
use serde::Serialize;
use sqlx::FromRow;

use crate::error::DbError;

/// Id/label projection row. Queries alias their label column to `label`.
#[derive(Debug, FromRow)]
struct ReferenceRow {
    id: DbId,
    label: String,
}

fn into_reference_list(rows: Vec<ReferenceRow>) -> ReferenceList {
    rows.into_iter().map(|row| (row.id, row.label)).collect()
}

/// Run the entity's validation schema; reject before touching storage.
fn ensure_valid<T: Serialize>(
    entity: &'static str,
    record: &T,
    rules: &[FieldRule],
) -> Result<(), DbError> {
    let result = validation::validate(record, rules)?;
    if result.is_valid {
        return Ok(());
    }
    tracing::warn!(
        entity,
        fields = ?result.failed_fields(),
        "Rejected record failing validation"
    );
    Err(CoreError::from_validation(entity, &result).into())
}
