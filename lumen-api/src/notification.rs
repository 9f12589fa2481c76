use serde::{Deserialize, Serialize};

pub const BIG_TEXT_STYLE: &str = "BigTextStyle";

/// Icon drawn on the notification when the payload names none.
pub const DEFAULT_SMALL_ICON: &str = "ic_lightbulb";

fn default_style() -> String {
    BIG_TEXT_STYLE.to_string()
}

/// Notification document understood by the wearable renderer.
///
/// This is the JSON carried inside `data.payload` of a push request.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WearNotification {
    /// Rendering style, always `BigTextStyle` for Lumen
    #[serde(default = "default_style")]
    pub style: String,
    /// Collapsed title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_title: Option<String>,
    /// Collapsed text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    /// Expanded content
    #[serde(rename = "BigTextStyle")]
    pub big_text_style: BigTextStyle,
    /// Small icon resource name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<String>,
    /// Background resource name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigTextStyle {
    /// Expanded title
    #[serde(default)]
    pub big_content_title: String,
    /// Expanded body text
    #[serde(default)]
    pub big_text: String,
    /// Summary line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl WearNotification {
    pub fn big_text(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: default_style(),
            content_title: None,
            content_text: None,
            big_text_style: BigTextStyle {
                big_content_title: title.into(),
                big_text: text.into(),
                summary: None,
            },
            small_icon: None,
            background: None,
        }
    }

    pub fn with_content(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.content_title = Some(title.into());
        self.content_text = Some(text.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.big_text_style.summary = Some(summary.into());
        self
    }

    pub fn with_small_icon(mut self, icon: impl Into<String>) -> Self {
        self.small_icon = Some(icon.into());
        self
    }

    /// Background resource follows the `ic_lightbulb_<code>` naming.
    pub fn with_background(mut self, code: &str) -> Self {
        self.background = Some(format!("{DEFAULT_SMALL_ICON}_{code}"));
        self
    }

    pub fn from_payload(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    pub fn to_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn content(&self) -> NotificationContent {
        NotificationContent::from(self)
    }
}

/// What the phone screen displays for a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub summary: String,
    pub icon: String,
}

impl From<&WearNotification> for NotificationContent {
    fn from(value: &WearNotification) -> Self {
        Self {
            title: value.big_text_style.big_content_title.clone(),
            body: value.big_text_style.big_text.clone(),
            summary: value.big_text_style.summary.clone().unwrap_or_default(),
            icon: value
                .small_icon
                .clone()
                .unwrap_or_else(|| DEFAULT_SMALL_ICON.to_string()),
        }
    }
}
