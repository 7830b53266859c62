//! Authentication primitives.
//!
//! - [`gate`] -- the single configured credential pair behind `POST /auth/login`.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`password`] -- Argon2id hashing for stored user passwords.

pub mod gate;
pub mod jwt;
pub mod password;
