//! Shared response types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement envelope for admin operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
