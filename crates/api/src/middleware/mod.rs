//! Request extractors that gate access.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated identity from a JWT Bearer token.

pub mod auth;
