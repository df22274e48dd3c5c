//! Campaign entity model.

use campaign_core::types::{DbId, UNSAVED_ID};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `campaigns` table.
///
/// `id` stays [`UNSAVED_ID`] until the record is inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Campaign {
    pub id: DbId,
    /// Business code, at most 50 characters. Not unique at schema level.
    pub code_campaign: String,
    pub title: String,
    pub description: String,
    pub active: bool,
}

impl Campaign {
    /// Build an unsaved, inactive campaign.
    pub fn new(
        code_campaign: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            code_campaign: code_campaign.into(),
            title: title.into(),
            description: description.into(),
            active: false,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Whether both records are persisted and refer to the same row.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.is_persisted() && self.id == other.id
    }
}
