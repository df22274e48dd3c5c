//! Theme entity model.

use campaign_core::types::{DbId, UNSAVED_ID};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `campaign_themes` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Theme {
    pub id: DbId,
    pub campaign_id: DbId,
    pub title: String,
    pub description: String,
    pub active: bool,
    /// Colour code used by the front office, e.g. `#4caf50`.
    pub front_rgb: String,
    /// Id of the image resource held by the host's file store.
    pub image_file: DbId,
}

impl Theme {
    /// Build an unsaved, inactive theme with no colour or image.
    pub fn new(campaign_id: DbId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            campaign_id,
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    pub fn same_identity(&self, other: &Self) -> bool {
        self.is_persisted() && self.id == other.id
    }
}
