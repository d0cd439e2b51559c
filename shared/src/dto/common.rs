use serde::{Deserialize, Serialize};

/// Error body returned by the dashboard API on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
