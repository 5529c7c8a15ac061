//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "success": true }` body returned by deletes and mark-read calls.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "success": true, "count": n }` body returned by bulk mutations.
#[derive(Debug, Serialize)]
pub struct SuccessCountResponse {
    pub success: bool,
    pub count: usize,
}
