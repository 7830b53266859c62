//! Character (`personaje`) entity model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "altura")]
    pub height: f64,
    #[serde(rename = "genero")]
    pub gender: String,
    #[serde(rename = "peso")]
    pub weight: f64,
}

/// DTO for creating a character or replacing all of its fields. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "altura")]
    pub height: f64,
    #[serde(rename = "genero")]
    pub gender: String,
    #[serde(rename = "peso")]
    pub weight: f64,
}
