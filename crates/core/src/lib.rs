//! Domain building blocks shared by the store and the HTTP layer.

pub mod error;
pub mod favorites;
pub mod types;
pub mod validation;
