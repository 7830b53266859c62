//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Reads take `&DbPool`; deletes accept any executor so cascades can run
//! inside a transaction. SQL sticks to the subset shared by SQLite and
//! PostgreSQL: `$N` placeholders and `RETURNING`.

pub mod character_repo;
pub mod favorite_repo;
pub mod planet_repo;
pub mod user_repo;

pub use character_repo::CharacterRepo;
pub use favorite_repo::FavoriteRepo;
pub use planet_repo::PlanetRepo;
pub use user_repo::UserRepo;
