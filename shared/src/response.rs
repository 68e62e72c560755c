//! API Response types

use serde::{Deserialize, Serialize};

/// Status message returned by the mutating routes
///
/// ```json
/// { "message": "Employee added successfully" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
