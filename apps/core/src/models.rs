use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for the remote prompt generation endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct GenerateRequest {
    /// The task text to enhance into a full prompt.
    #[validate(length(min = 1))]
    pub prompt: String,
    /// Optional model identifier; the endpoint picks its default otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Response payload from the remote prompt generation endpoint.
///
/// Exactly one of `result` or `error` is expected to be set.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
