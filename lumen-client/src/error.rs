use lumen_api::Origin;

/// Error reported by the push gateway SDK through its `onError(code, description)` callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("gateway error {code}: {description}")]
pub struct GatewayError {
    pub code: String,
    pub description: String,
}

impl GatewayError {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode preferences: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Preference store lock poisoned")]
    Poisoned,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Wearable is not connected")]
    NotConnected,

    #[error("Notification rejected by renderer: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Unknown {origin} groups: {groups:?}")]
    UnknownGroups { origin: Origin, groups: Vec<String> },

    #[error("Preference error: {0}")]
    Preference(#[from] PreferenceError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Malformed notification payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
