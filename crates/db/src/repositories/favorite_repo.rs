//! Repository for the `favorites` link table.

use holonet_core::types::DbId;
use sqlx::AnyExecutor;

use crate::models::favorite::{CreateFavorite, Favorite};
use crate::DbPool;

const COLUMNS: &str = "id, user_id, character_id, planet_id";

/// Provides insert, lookup and delete operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a new favorite, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateFavorite) -> Result<Favorite, sqlx::Error> {
        let (character_id, planet_id) = input.target.columns();
        let query = format!(
            "INSERT INTO favorites (user_id, character_id, planet_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(input.user_id)
            .bind(character_id)
            .bind(planet_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE id = $1");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the favorites owned by a user.
    pub async fn list_by_user(pool: &DbPool, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the favorites that point at a planet.
    pub async fn list_by_planet(
        pool: &DbPool,
        planet_id: DbId,
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE planet_id = $1 ORDER BY id");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(planet_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a favorite by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl AnyExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every favorite owned by a user. Returns the number of rows removed.
    pub async fn delete_by_user<'e>(
        executor: impl AnyExecutor<'e>,
        user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1")
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_character<'e>(
        executor: impl AnyExecutor<'e>,
        character_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE character_id = $1")
            .bind(character_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_planet<'e>(
        executor: impl AnyExecutor<'e>,
        planet_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE planet_id = $1")
            .bind(planet_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
