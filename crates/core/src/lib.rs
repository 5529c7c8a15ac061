//! Domain types, constants, and validation rules for the RailOps dashboard.
//!
//! Nothing in this crate touches storage or HTTP; it is shared by the
//! store, the side-effect hooks, and the API layer.

pub mod activity;
pub mod alert;
pub mod error;
pub mod identity;
pub mod notification;
pub mod project;
pub mod types;
