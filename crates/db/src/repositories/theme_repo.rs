//! Repository for the `campaign_themes` table.

use campaign_core::error::CoreError;
use campaign_core::reference::ReferenceList;
use campaign_core::types::DbId;
use campaign_core::validation::schema::THEME_RULES;

use super::{ensure_valid, into_reference_list, ReferenceRow};
use crate::error::DbResult;
use crate::models::theme::Theme;
use crate::DbPool;

const ENTITY: &str = "theme";

/// Column list for `campaign_themes` queries.
const COLUMNS: &str = "\
    id, campaign_id, title, description, active, \
    front_rgb, image_file";

/// Provides data access for campaign themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Validate and insert a theme, writing the generated id back into it.
    pub async fn insert(pool: &DbPool, theme: &mut Theme) -> DbResult<()> {
        ensure_valid(ENTITY, &*theme, THEME_RULES)?;
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO campaign_themes \
                 (campaign_id, title, description, active, front_rgb, image_file) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(theme.campaign_id)
        .bind(&theme.title)
        .bind(&theme.description)
        .bind(theme.active)
        .bind(&theme.front_rgb)
        .bind(theme.image_file)
        .fetch_one(pool)
        .await?;
        theme.id = id;
        tracing::debug!(theme_id = id, campaign_id = theme.campaign_id, "Inserted theme");
        Ok(())
    }

    /// Find a theme by its id.
    ///
    /// Returns `None` if no row matches.
    pub async fn load(pool: &DbPool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaign_themes WHERE id = $1");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Validate and overwrite every column of the row keyed by `theme.id`.
    ///
    /// Fails with `CoreError::NotFound` if no row has that id.
    pub async fn store(pool: &DbPool, theme: &Theme) -> DbResult<()> {
        ensure_valid(ENTITY, theme, THEME_RULES)?;
        let result = sqlx::query(
            "UPDATE campaign_themes SET \
                 campaign_id = $2, \
                 title = $3, \
                 description = $4, \
                 active = $5, \
                 front_rgb = $6, \
                 image_file = $7 \
             WHERE id = $1",
        )
        .bind(theme.id)
        .bind(theme.campaign_id)
        .bind(&theme.title)
        .bind(&theme.description)
        .bind(theme.active)
        .bind(&theme.front_rgb)
        .bind(theme.image_file)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: ENTITY,
                id: theme.id,
            }
            .into());
        }
        tracing::debug!(theme_id = theme.id, "Stored theme");
        Ok(())
    }

    /// Delete a theme by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaign_themes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        tracing::debug!(theme_id = id, deleted, "Deleted theme");
        Ok(deleted)
    }

    /// List all themes in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaign_themes ORDER BY id");
        sqlx::query_as::<_, Theme>(&query).fetch_all(pool).await
    }

    /// List the themes of one campaign in insertion order.
    pub async fn list_by_campaign(
        pool: &DbPool,
        campaign_id: DbId,
    ) -> Result<Vec<Theme>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM campaign_themes WHERE campaign_id = $1 ORDER BY id");
        sqlx::query_as::<_, Theme>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }

    /// List the active themes of one campaign in insertion order.
    pub async fn list_active_by_campaign(
        pool: &DbPool,
        campaign_id: DbId,
    ) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaign_themes \
             WHERE campaign_id = $1 AND active \
             ORDER BY id"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }

    /// List every theme id in insertion order.
    pub async fn list_ids(pool: &DbPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM campaign_themes ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Id/title pairs for every theme, in insertion order.
    pub async fn list_reference(pool: &DbPool) -> Result<ReferenceList, sqlx::Error> {
        let rows = sqlx::query_as::<_, ReferenceRow>(
            "SELECT id, title AS label FROM campaign_themes ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(into_reference_list(rows))
    }
}
