use serde::{Deserialize, Serialize};

use crate::notification::WearNotification;

/// Request body accepted by the push gateway's `/api/v2/push` endpoint.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushRequest {
    /// Sender registered with the gateway
    #[serde(rename = "senderId")]
    pub sender_id: String,
    /// Delivery instructions
    pub gcm: GcmMessage,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcmMessage {
    /// Validate only, do not deliver
    pub dry_run: bool,
    /// Message lifetime in seconds
    pub time_to_live: u32,
    /// Receiver groups
    pub groups: Vec<String>,
    /// Data handed to the device
    pub data: PushData,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushData {
    /// Notification document, serialized as a JSON string
    pub payload: String,
}

impl PushRequest {
    pub const DEFAULT_TIME_TO_LIVE: u32 = 1;

    pub fn new(sender_id: impl Into<String>, groups: Vec<String>, payload: String) -> Self {
        Self {
            sender_id: sender_id.into(),
            gcm: GcmMessage {
                dry_run: false,
                time_to_live: Self::DEFAULT_TIME_TO_LIVE,
                groups,
                data: PushData { payload },
            },
        }
    }

    pub fn for_notification(
        sender_id: impl Into<String>,
        groups: Vec<String>,
        notification: &WearNotification,
    ) -> serde_json::Result<Self> {
        Ok(Self::new(sender_id, groups, notification.to_payload()?))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.gcm.dry_run = dry_run;
        self
    }

    pub fn with_time_to_live(mut self, time_to_live: u32) -> Self {
        self.gcm.time_to_live = time_to_live;
        self
    }

    pub fn notification(&self) -> serde_json::Result<WearNotification> {
        WearNotification::from_payload(&self.gcm.data.payload)
    }
}
