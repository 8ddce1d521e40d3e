use serde::{Deserialize, Serialize};

/// Review as returned by (and echoed back from) the reviews endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRes {
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub date: i64,
    pub rating: u8,
    pub text: String,
}

/// Payload for submitting a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewReq {
    pub rating: u8,
    pub text: String,
}
