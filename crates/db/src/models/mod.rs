//! Row structs and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - An input struct holding every mutable column, used for inserts and for
//!   full-replace updates
//!
//! Rust fields use English column names; the serialized names are the
//! public (Spanish) keys of the HTTP API.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
