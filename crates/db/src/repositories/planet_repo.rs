//! Repository for the `planets` table.

use holonet_core::types::DbId;
use sqlx::AnyExecutor;

use crate::models::planet::{Planet, PlanetInput};
use crate::DbPool;

const COLUMNS: &str = "id, name, diameter, orbital_period, population";

/// Provides CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &DbPool, input: &PlanetInput) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, diameter, orbital_period, population)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(input.diameter)
            .bind(input.orbital_period)
            .bind(input.population)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column of a planet.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &PlanetInput,
    ) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!(
            "UPDATE planets SET
                name = $2,
                diameter = $3,
                orbital_period = $4,
                population = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.diameter)
            .bind(input.orbital_period)
            .bind(input.population)
            .fetch_optional(pool)
            .await
    }

    /// Delete a planet by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl AnyExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM planets WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}
