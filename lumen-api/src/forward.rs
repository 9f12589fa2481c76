use serde::{Deserialize, Serialize};

use crate::notification::WearNotification;
use crate::push::PushRequest;

/// Query of `GET /forward`. Absent parameters are empty strings.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardQuery {
    /// Sender id registered with the gateway
    pub sid: String,
    /// Receiver group
    pub grp: String,
    /// Notification title
    pub title: String,
    /// Notification text
    pub text: String,
    /// Icon code
    pub icon: String,
}

impl ForwardQuery {
    /// Build from raw query pairs. The first value of a repeated key wins and
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        let mut seen = [false; 5];

        for (key, value) in pairs {
            let (index, field) = match key.as_ref() {
                "sid" => (0, &mut query.sid),
                "grp" => (1, &mut query.grp),
                "title" => (2, &mut query.title),
                "text" => (3, &mut query.text),
                "icon" => (4, &mut query.icon),
                _ => continue,
            };
            if !seen[index] {
                seen[index] = true;
                *field = value.into();
            }
        }

        query
    }

    pub fn notification(&self) -> WearNotification {
        WearNotification::big_text(&self.title, &self.text)
            .with_small_icon(&self.icon)
            .with_background(&self.icon)
    }

    pub fn to_push_request(&self) -> serde_json::Result<PushRequest> {
        PushRequest::for_notification(&self.sid, vec![self.grp.clone()], &self.notification())
    }
}
