//! User entity model and DTOs.

use chrono::NaiveDate;
use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

/// Storage format of `subscription_date`, a `TEXT` column on every backend.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A user row from the `users` table.
///
/// The password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "fecha_suscripcion")]
    pub subscription_date: NaiveDate,
}

impl<'r> FromRow<'r, AnyRow> for User {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let raw_date: String = row.try_get("subscription_date")?;
        let subscription_date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "subscription_date".into(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            surname: row.try_get("surname")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            subscription_date,
        })
    }
}

/// Column values for inserting or fully replacing a user.
///
/// `password_hash` must already be hashed; the API layer owns hashing.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub subscription_date: NaiveDate,
}

impl UserRecord {
    pub fn subscription_date_text(&self) -> String {
        self.subscription_date.format(DATE_FORMAT).to_string()
    }
}
