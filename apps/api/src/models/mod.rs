pub mod contact;
pub mod job;
pub mod resume;

use serde::{Deserialize, Serialize};

/// Response body for successful create operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

/// Response body for successful update/delete operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
