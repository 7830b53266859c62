pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod private;
pub mod user;
