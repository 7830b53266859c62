//! The favorites linker.
//!
//! Owns every rule about the favorites link table: owner and target
//! existence, the single-target invariant, the ownership check on removal,
//! and cascade deletes of owners and targets. Handlers only translate HTTP
//! into these calls.

use holonet_core::favorites::{FavoritePolicy, FavoriteTarget};
use holonet_core::types::DbId;
use holonet_db::models::favorite::{CreateFavorite, Favorite};
use holonet_db::repositories::{CharacterRepo, FavoriteRepo, PlanetRepo, UserRepo};
use holonet_db::DbPool;

use crate::error::{not_found, AppResult};

pub const USER_ENTITY: &str = "User";
pub const CHARACTER_ENTITY: &str = "Personaje";
pub const PLANET_ENTITY: &str = "Planeta";
pub const FAVORITE_ENTITY: &str = "Favorito";

/// Favorite operations under a fixed [`FavoritePolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FavoritesLinker {
    policy: FavoritePolicy,
}

impl FavoritesLinker {
    pub fn new(policy: FavoritePolicy) -> Self {
        Self { policy }
    }

    /// All favorites owned by `user_id`. NotFound if the user does not exist.
    pub async fn favorites_by_user(&self, pool: &DbPool, user_id: DbId) -> AppResult<Vec<Favorite>> {
        ensure_user(pool, user_id).await?;
        Ok(FavoriteRepo::list_by_user(pool, user_id).await?)
    }

    /// All favorites pointing at `planet_id`. NotFound if the planet does not exist.
    ///
    /// There is no character counterpart; character favorites are only
    /// reachable through their owner.
    pub async fn favorites_by_planet(
        &self,
        pool: &DbPool,
        planet_id: DbId,
    ) -> AppResult<Vec<Favorite>> {
        ensure_planet(pool, planet_id).await?;
        Ok(FavoriteRepo::list_by_planet(pool, planet_id).await?)
    }

    /// NotFound unless `user_id` exists.
    pub async fn require_user(&self, pool: &DbPool, user_id: DbId) -> AppResult<()> {
        ensure_user(pool, user_id).await
    }

    /// NotFound unless `planet_id` exists.
    pub async fn require_planet(&self, pool: &DbPool, planet_id: DbId) -> AppResult<()> {
        ensure_planet(pool, planet_id).await
    }

    /// Link `user_id` to exactly one of `character_id` / `planet_id`.
    ///
    /// Checks, in order: the user exists, exactly one target is given, the
    /// target exists.
    pub async fn add_favorite(
        &self,
        pool: &DbPool,
        user_id: DbId,
        character_id: Option<DbId>,
        planet_id: Option<DbId>,
    ) -> AppResult<Favorite> {
        ensure_user(pool, user_id).await?;
        let target = FavoriteTarget::resolve(character_id, planet_id)?;
        ensure_target(pool, target).await?;

        let favorite = FavoriteRepo::create(pool, &CreateFavorite { user_id, target }).await?;
        tracing::info!(
            favorite_id = favorite.id,
            user_id,
            target = ?target,
            "Favorite created"
        );
        Ok(favorite)
    }

    /// Delete a favorite by its own id.
    ///
    /// `requested_by` is the user id from the route. It is ignored unless the
    /// ownership check is enabled, in which case a favorite owned by someone
    /// else reports NotFound.
    pub async fn remove_favorite(
        &self,
        pool: &DbPool,
        requested_by: DbId,
        favorite_id: DbId,
    ) -> AppResult<()> {
        let favorite = FavoriteRepo::find_by_id(pool, favorite_id)
            .await?
            .ok_or_else(|| not_found(FAVORITE_ENTITY, favorite_id))?;

        if !self.policy.may_remove(favorite.user_id, requested_by) {
            tracing::warn!(
                favorite_id,
                owner = favorite.user_id,
                requested_by,
                "Refused to delete favorite owned by another user"
            );
            return Err(not_found(FAVORITE_ENTITY, favorite_id));
        }

        if !FavoriteRepo::delete(pool, favorite_id).await? {
            return Err(not_found(FAVORITE_ENTITY, favorite_id));
        }
        tracing::info!(
            favorite_id,
            owner = favorite.user_id,
            target = ?favorite.target(),
            "Favorite deleted"
        );
        Ok(())
    }

    /// Delete a user, and its favorites when cascading. Returns `false` if absent.
    pub async fn delete_user(&self, pool: &DbPool, id: DbId) -> AppResult<bool> {
        if !self.policy.cascade_delete {
            return Ok(UserRepo::delete(pool, id).await?);
        }

        let mut tx = pool.begin().await?;
        let removed = FavoriteRepo::delete_by_user(&mut *tx, id).await?;
        let deleted = UserRepo::delete(&mut *tx, id).await?;
        finish_cascade(tx, deleted, USER_ENTITY, id, removed).await
    }

    /// Delete a character, and favorites pointing at it when cascading.
    pub async fn delete_character(&self, pool: &DbPool, id: DbId) -> AppResult<bool> {
        if !self.policy.cascade_delete {
            return Ok(CharacterRepo::delete(pool, id).await?);
        }

        let mut tx = pool.begin().await?;
        let removed = FavoriteRepo::delete_by_character(&mut *tx, id).await?;
        let deleted = CharacterRepo::delete(&mut *tx, id).await?;
        finish_cascade(tx, deleted, CHARACTER_ENTITY, id, removed).await
    }

    /// Delete a planet, and favorites pointing at it when cascading.
    pub async fn delete_planet(&self, pool: &DbPool, id: DbId) -> AppResult<bool> {
        if !self.policy.cascade_delete {
            return Ok(PlanetRepo::delete(pool, id).await?);
        }

        let mut tx = pool.begin().await?;
        let removed = FavoriteRepo::delete_by_planet(&mut *tx, id).await?;
        let deleted = PlanetRepo::delete(&mut *tx, id).await?;
        finish_cascade(tx, deleted, PLANET_ENTITY, id, removed).await
    }
}

/// Commit a cascade when the parent row existed; otherwise roll it back so
/// stray favorites of a missing parent are left untouched.
async fn finish_cascade(
    tx: sqlx::Transaction<'_, sqlx::Any>,
    deleted: bool,
    entity: &'static str,
    id: DbId,
    favorites_removed: u64,
) -> AppResult<bool> {
    if deleted {
        tx.commit().await?;
        tracing::info!(entity, id, favorites_removed, "Cascade delete committed");
    } else {
        tx.rollback().await?;
    }
    Ok(deleted)
}

async fn ensure_user(pool: &DbPool, id: DbId) -> AppResult<()> {
    if UserRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found(USER_ENTITY, id))
    }
}

async fn ensure_planet(pool: &DbPool, id: DbId) -> AppResult<()> {
    if PlanetRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found(PLANET_ENTITY, id))
    }
}

async fn ensure_target(pool: &DbPool, target: FavoriteTarget) -> AppResult<()> {
    let exists = match target {
        FavoriteTarget::Character(id) => CharacterRepo::exists(pool, id).await?,
        FavoriteTarget::Planet(id) => PlanetRepo::exists(pool, id).await?,
    };
    if exists {
        Ok(())
    } else {
        Err(not_found(target.entity(), target.id()))
    }
}
