//! Repository for the `campaigns` table.

use campaign_core::error::CoreError;
use campaign_core::reference::ReferenceList;
use campaign_core::types::DbId;
use campaign_core::validation::schema::CAMPAIGN_RULES;

use super::{ensure_valid, into_reference_list, ReferenceRow};
use crate::error::DbResult;
use crate::models::campaign::Campaign;
use crate::DbPool;

const ENTITY: &str = "campaign";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code_campaign, title, description, active";

/// Provides CRUD operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Validate and insert a campaign, writing the generated id back into it.
    ///
    /// On any failure the campaign's `id` is left untouched.
    pub async fn insert(pool: &DbPool, campaign: &mut Campaign) -> DbResult<()> {
        ensure_valid(ENTITY, &*campaign, CAMPAIGN_RULES)?;
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO campaigns (code_campaign, title, description, active)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&campaign.code_campaign)
        .bind(&campaign.title)
        .bind(&campaign.description)
        .bind(campaign.active)
        .fetch_one(pool)
        .await?;
        campaign.id = id;
        tracing::debug!(campaign_id = id, code = %campaign.code_campaign, "Inserted campaign");
        Ok(())
    }

    /// Find a campaign by id. Returns `None` if no row matches.
    pub async fn load(pool: &DbPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a campaign by business code.
    ///
    /// Codes are not unique at schema level; the oldest match wins.
    pub async fn find_by_code(
        pool: &DbPool,
        code_campaign: &str,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM campaigns WHERE code_campaign = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(code_campaign)
            .fetch_optional(pool)
            .await
    }

    /// Validate and overwrite every column of the row keyed by `campaign.id`.
    ///
    /// Fails with `CoreError::NotFound` if no row has that id.
    pub async fn store(pool: &DbPool, campaign: &Campaign) -> DbResult<()> {
        ensure_valid(ENTITY, campaign, CAMPAIGN_RULES)?;
        let result = sqlx::query(
            "UPDATE campaigns SET
                code_campaign = $2,
                title = $3,
                description = $4,
                active = $5
             WHERE id = $1",
        )
        .bind(campaign.id)
        .bind(&campaign.code_campaign)
        .bind(&campaign.title)
        .bind(&campaign.description)
        .bind(campaign.active)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: ENTITY,
                id: campaign.id,
            }
            .into());
        }
        tracing::debug!(campaign_id = campaign.id, "Stored campaign");
        Ok(())
    }

    /// Permanently delete a campaign by id. Returns `true` if a row was removed.
    ///
    /// Phases and themes referencing the campaign are left in place.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        tracing::debug!(campaign_id = id, deleted, "Deleted campaign");
        Ok(deleted)
    }

    /// List all campaigns in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns ORDER BY id");
        sqlx::query_as::<_, Campaign>(&query).fetch_all(pool).await
    }

    /// List active campaigns in insertion order.
    pub async fn list_active(pool: &DbPool) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE active ORDER BY id");
        sqlx::query_as::<_, Campaign>(&query).fetch_all(pool).await
    }

    /// List every campaign id in insertion order.
    pub async fn list_ids(pool: &DbPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM campaigns ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Id/title pairs for every campaign, in insertion order.
    pub async fn list_reference(pool: &DbPool) -> Result<ReferenceList, sqlx::Error> {
        let rows = sqlx::query_as::<_, ReferenceRow>(
            "SELECT id, title AS label FROM campaigns ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(into_reference_list(rows))
    }
}
