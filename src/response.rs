//! Standard response bodies for the write endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessBody {
    pub success: bool,
}

/// The `{"success": true}` acknowledgement every write endpoint returns.
pub fn success() -> Json<SuccessBody> {
    Json(SuccessBody { success: true })
}
