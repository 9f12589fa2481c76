use std::sync::Arc;

use lumen_api::WearNotification;

use crate::error::RenderError;
use crate::preferences::Preferences;
use crate::ui::UiAttachment;

/// Notification shown by the demo action before any push has arrived.
pub const DEMO_NOTIFICATION: &str = include_str!("../assets/notification.json");

/// Renders notifications on the paired wearable.
pub trait WearableRenderer: Send + Sync {
    fn render(&self, notification: &WearNotification) -> Result<(), RenderError>;
}

/// What happened to one relayed payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delivery {
    pub rendered: bool,
    pub displayed: bool,
}

pub struct NotificationRelay {
    preferences: Preferences,
    renderer: Arc<dyn WearableRenderer>,
    ui: Arc<UiAttachment>,
}

impl NotificationRelay {
    pub fn new(
        preferences: Preferences,
        renderer: Arc<dyn WearableRenderer>,
        ui: Arc<UiAttachment>,
    ) -> Self {
        Self {
            preferences,
            renderer,
            ui,
        }
    }

    /// Handle a payload delivered by the push platform.
    ///
    /// Never fails: storage, parse and render errors are logged and the
    /// remaining steps are skipped.
    pub fn on_message(&self, payload: &str) -> Delivery {
        let message = payload.trim_end_matches(['\r', '\n']);
        tracing::debug!("received message: {}", message);

        if let Err(e) = self.preferences.set_last_message(message) {
            tracing::error!("failed to store last message: {}", e);
        }

        self.relay(message)
    }

    /// Replay the last received message, or the bundled sample if none arrived yet.
    pub fn replay_last(&self) -> Delivery {
        let message = match self.preferences.last_message() {
            Ok(Some(message)) => message,
            Ok(None) => DEMO_NOTIFICATION.trim_end().to_string(),
            Err(e) => {
                tracing::error!("failed to read last message: {}", e);
                DEMO_NOTIFICATION.trim_end().to_string()
            }
        };

        self.relay(&message)
    }

    fn relay(&self, message: &str) -> Delivery {
        let notification = match WearNotification::from_payload(message) {
            Ok(notification) => notification,
            Err(e) => {
                tracing::error!("notification content instantiation failed: {}", e);
                return Delivery::default();
            }
        };

        let rendered = match self.renderer.render(&notification) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("wearable rendering failed: {}", e);
                false
            }
        };

        let displayed = self.ui.deliver(&notification.content());

        Delivery {
            rendered,
            displayed,
        }
    }
}
