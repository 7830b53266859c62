//! Favorite (`favorito`) link model.

use holonet_core::favorites::FavoriteTarget;
use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A favorite row from the `favorites` table.
///
/// Serialized flat, with a `null` for the target column that is not set.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    #[serde(rename = "usuario_id")]
    pub user_id: DbId,
    #[serde(rename = "personajes_id")]
    pub character_id: Option<DbId>,
    #[serde(rename = "planetas_id")]
    pub planet_id: Option<DbId>,
}

impl Favorite {
    /// The tagged target, or `None` for rows that predate target validation.
    pub fn target(&self) -> Option<FavoriteTarget> {
        FavoriteTarget::resolve(self.character_id, self.planet_id).ok()
    }
}

/// DTO for inserting a favorite. The target is already validated.
#[derive(Debug, Clone, Copy)]
pub struct CreateFavorite {
    pub user_id: DbId,
    pub target: FavoriteTarget,
}
