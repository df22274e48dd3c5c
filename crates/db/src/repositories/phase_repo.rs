//! Repository for the `campaign_phases` table.

use campaign_core::error::CoreError;
use campaign_core::reference::ReferenceList;
use campaign_core::types::DbId;
use campaign_core::validation::schema::PHASE_RULES;

use super::{ensure_valid, into_reference_list, ReferenceRow};
use crate::error::DbResult;
use crate::models::phase::Phase;
use crate::DbPool;

const ENTITY: &str = "phase";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, campaign_id, starting_date, ending_date, label, order_num";

/// Provides CRUD operations for campaign phases.
pub struct PhaseRepo;

impl PhaseRepo {
    /// Validate and insert a phase, writing the generated id back into it.
    ///
    /// The parent campaign is not checked.
    pub async fn insert(pool: &DbPool, phase: &mut Phase) -> DbResult<()> {
        ensure_valid(ENTITY, &*phase, PHASE_RULES)?;
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO campaign_phases (campaign_id, starting_date, ending_date, label, order_num)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(phase.campaign_id)
        .bind(phase.starting_date)
        .bind(phase.ending_date)
        .bind(&phase.label)
        .bind(phase.order_num)
        .fetch_one(pool)
        .await?;
        phase.id = id;
        tracing::debug!(phase_id = id, campaign_id = phase.campaign_id, "Inserted phase");
        Ok(())
    }

    /// Find a phase by id. Returns `None` if no row matches.
    pub async fn load(pool: &DbPool, id: DbId) -> Result<Option<Phase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaign_phases WHERE id = $1");
        sqlx::query_as::<_, Phase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Validate and overwrite every column of the row keyed by `phase.id`.
    ///
    /// Fails with `CoreError::NotFound` if no row has that id.
    pub async fn store(pool: &DbPool, phase: &Phase) -> DbResult<()> {
        ensure_valid(ENTITY, phase, PHASE_RULES)?;
        let result = sqlx::query(
            "UPDATE campaign_phases SET
                campaign_id = $2,
                starting_date = $3,
                ending_date = $4,
                label = $5,
                order_num = $6
             WHERE id = $1",
        )
        .bind(phase.id)
        .bind(phase.campaign_id)
        .bind(phase.starting_date)
        .bind(phase.ending_date)
        .bind(&phase.label)
        .bind(phase.order_num)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: ENTITY,
                id: phase.id,
            }
            .into());
        }
        tracing::debug!(phase_id = phase.id, "Stored phase");
        Ok(())
    }

    /// Permanently delete a phase by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaign_phases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        tracing::debug!(phase_id = id, deleted, "Deleted phase");
        Ok(deleted)
    }

    /// List all phases in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Phase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaign_phases ORDER BY id");
        sqlx::query_as::<_, Phase>(&query).fetch_all(pool).await
    }

    /// List the phases of one campaign by display order, ties broken by id.
    pub async fn list_by_campaign(
        pool: &DbPool,
        campaign_id: DbId,
    ) -> Result<Vec<Phase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaign_phases WHERE campaign_id = $1 ORDER BY order_num, id"
        );
        sqlx::query_as::<_, Phase>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }

    /// List every phase id in insertion order.
    pub async fn list_ids(pool: &DbPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM campaign_phases ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Id/label pairs for every phase, in insertion order.
    pub async fn list_reference(pool: &DbPool) -> Result<ReferenceList, sqlx::Error> {
        let rows = sqlx::query_as::<_, ReferenceRow>(
            "SELECT id, label FROM campaign_phases ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(into_reference_list(rows))
    }
}
