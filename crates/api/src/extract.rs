//! Extractors that turn axum rejections into [`AppError::BadRequest`].
//!
//! Plain `axum::Json` answers a missing field with 422 and a missing
//! content type with 415; the dashboard API reports every unusable body or
//! query string as 400 with the usual JSON error envelope.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
