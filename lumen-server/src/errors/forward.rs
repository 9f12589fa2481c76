#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("Failed to encode push request: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Gateway request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ForwardError {
    /// Body returned in place of a status code when nothing was received.
    pub const STATUS_SENTINEL: i32 = -1;
}
