//! The health check endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

/// The message returned while the server is up.
pub const AVAILABILITY_MESSAGE: &str = "SentinelStream API is running";

/// The body of the health check response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// A fixed human readable message.
    pub message: String,
}

/// Report that the server is available.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: AVAILABILITY_MESSAGE.to_owned(),
    })
}
