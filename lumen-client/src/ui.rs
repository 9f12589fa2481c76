use std::sync::{Arc, Mutex, Weak};

use lumen_api::NotificationContent;

/// A visible screen able to show a notification.
pub trait UiSurface: Send + Sync {
    fn show_message(&self, content: &NotificationContent);
}

/// Weak handle on the currently visible UI surface.
///
/// The attachment never keeps a surface alive; a surface dropped by its owner
/// behaves like a detached one.
#[derive(Default)]
pub struct UiAttachment {
    surface: Mutex<Option<Weak<dyn UiSurface>>>,
}

impl UiAttachment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, surface: &Arc<dyn UiSurface>) {
        if let Ok(mut current) = self.surface.lock() {
            *current = Some(Arc::downgrade(surface));
        }
    }

    pub fn detach(&self) {
        if let Ok(mut current) = self.surface.lock() {
            *current = None;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.upgrade().is_some()
    }

    /// Show `content` on the attached surface. Returns `false` when it was dropped.
    pub fn deliver(&self, content: &NotificationContent) -> bool {
        match self.upgrade() {
            Some(surface) => {
                surface.show_message(content);
                true
            }
            None => {
                tracing::debug!("no ui surface attached, dropping message");
                false
            }
        }
    }

    fn upgrade(&self) -> Option<Arc<dyn UiSurface>> {
        self.surface
            .lock()
            .ok()
            .and_then(|current| current.as_ref().and_then(|weak| weak.upgrade()))
    }
}
