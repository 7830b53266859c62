//! Planet (`planeta`) entity model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "diametro")]
    pub diameter: i64,
    #[serde(rename = "periodo_orbital")]
    pub orbital_period: i64,
    #[serde(rename = "poblacion")]
    pub population: i64,
}

/// DTO for creating a planet or replacing all of its fields. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "diametro")]
    pub diameter: i64,
    #[serde(rename = "periodo_orbital")]
    pub orbital_period: i64,
    #[serde(rename = "poblacion")]
    pub population: i64,
}
