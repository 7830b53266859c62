//! Favorite target resolution and linking policy.
//!
//! A favorite links one user to exactly one target, either a character or a
//! planet. The table stores the target as two nullable columns; this module
//! owns the rule that exactly one of them is set.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// The single entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum FavoriteTarget {
    Character(DbId),
    Planet(DbId),
}

impl FavoriteTarget {
    /// Build a target from the two nullable ids carried by the wire format.
    ///
    /// Exactly one of `character_id` / `planet_id` must be present.
    pub fn resolve(character_id: Option<DbId>, planet_id: Option<DbId>) -> Result<Self, CoreError> {
        match (character_id, planet_id) {
            (Some(id), None) => Ok(Self::Character(id)),
            (None, Some(id)) => Ok(Self::Planet(id)),
            (None, None) => Err(CoreError::Validation(
                "A favorite needs either personajes_id or planetas_id".into(),
            )),
            (Some(_), Some(_)) => Err(CoreError::Validation(
                "A favorite cannot reference both personajes_id and planetas_id".into(),
            )),
        }
    }

    /// Split back into `(character_id, planet_id)` column values.
    pub fn columns(self) -> (Option<DbId>, Option<DbId>) {
        match self {
            Self::Character(id) => (Some(id), None),
            Self::Planet(id) => (None, Some(id)),
        }
    }

    /// Entity name used in not-found messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Character(_) => "Personaje",
            Self::Planet(_) => "Planeta",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            Self::Character(id) | Self::Planet(id) => id,
        }
    }
}

/// Switches for behavior the default API leaves open.
///
/// Both default to `false`, which keeps favorites alive after their owner or
/// target is deleted and lets any caller delete any favorite by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavoritePolicy {
    /// Delete favorites together with the user, character or planet they reference.
    pub cascade_delete: bool,
    /// Only delete a favorite through the route of the user who owns it.
    pub check_ownership: bool,
}

impl FavoritePolicy {
    /// Whether `requested_by` may remove a favorite owned by `owner`.
    pub fn may_remove(&self, owner: DbId, requested_by: DbId) -> bool {
        !self.check_ownership || owner == requested_by
    }
}
