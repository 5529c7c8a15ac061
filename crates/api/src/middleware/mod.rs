//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the acting user from a JWT Bearer token.

pub mod auth;
