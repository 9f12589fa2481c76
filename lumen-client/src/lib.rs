//! Device core of the Lumen client.
//!
//! The OS framework, the push platform, the gateway SDK and the wearable
//! renderer are reached through the traits in [`gateway`], [`relay`] and
//! [`ui`]; [`LumenClient`] wires them together.

pub mod app;
pub mod error;
pub mod gateway;
pub mod identity;
pub mod preferences;
pub mod registration;
pub mod relay;
pub mod settings;
pub mod sync;
pub mod ui;

pub use app::{Collaborators, LumenClient};
pub use error::{ClientError, GatewayError, PreferenceError, RenderError};
pub use gateway::{PushGateway, PushPlatform};
pub use preferences::{
    FilePreferences, MemoryPreferences, PreferenceStore, PreferenceValue, Preferences,
    SubscriptionState,
};
pub use registration::RegistrationClient;
pub use relay::{DEMO_NOTIFICATION, Delivery, NotificationRelay, WearableRenderer};
pub use settings::Settings;
pub use sync::{GroupSynchronizer, SyncCall, SyncFailure, SyncReport};
pub use ui::{UiAttachment, UiSurface};
