//! Uniform service result envelope

use serde::{Deserialize, Serialize};

/// Result wrapper returned by every service operation.
///
/// Failures are normal return values: `success = false` plus a
/// human-readable message. No operation surfaces an error any other way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Convenience for tests and callers that only need the payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
