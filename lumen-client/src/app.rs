use std::collections::BTreeSet;
use std::sync::Arc;

use lumen_api::{GroupCatalog, Origin};

use crate::error::{ClientError, Result};
use crate::gateway::{PushGateway, PushPlatform};
use crate::identity::resolve_user_id;
use crate::preferences::{PreferenceStore, Preferences, SubscriptionState, keys};
use crate::registration::RegistrationClient;
use crate::relay::{Delivery, NotificationRelay, WearableRenderer};
use crate::settings::Settings;
use crate::sync::{GroupSynchronizer, SyncReport};
use crate::ui::{UiAttachment, UiSurface};

/// Platform collaborators the device core is built from.
pub struct Collaborators {
    pub store: Arc<dyn PreferenceStore>,
    pub gateway: Arc<dyn PushGateway>,
    pub platform: Arc<dyn PushPlatform>,
    pub renderer: Arc<dyn WearableRenderer>,
}

/// Device core of the Lumen client: everything the main screen and the
/// settings screen call into.
pub struct LumenClient {
    catalog: Arc<GroupCatalog>,
    preferences: Preferences,
    synchronizer: Arc<GroupSynchronizer>,
    registration: RegistrationClient,
    relay: NotificationRelay,
    ui: Arc<UiAttachment>,
}

impl LumenClient {
    pub fn new(settings: Settings, collaborators: Collaborators) -> Self {
        let Settings { gateway: gateway_settings, catalog } = settings;
        let Collaborators {
            store,
            gateway,
            platform,
            renderer,
        } = collaborators;

        let catalog = Arc::new(catalog);
        let preferences = Preferences::new(store);
        let ui = Arc::new(UiAttachment::new());
        let synchronizer = Arc::new(GroupSynchronizer::new(gateway, preferences.clone()));
        let registration = RegistrationClient::new(
            platform,
            gateway_settings,
            preferences.clone(),
            synchronizer.clone(),
            catalog.clone(),
        );
        let relay = NotificationRelay::new(preferences.clone(), renderer, ui.clone());

        Self {
            catalog,
            preferences,
            synchronizer,
            registration,
            relay,
            ui,
        }
    }

    /// First start of the main screen: register the device, then retry a sync
    /// that did not complete during a previous run.
    pub async fn start<S: AsRef<str>>(&self, accounts: &[S]) -> Result<Option<SyncReport>> {
        let user_id = resolve_user_id(accounts);
        self.registration.register(&user_id).await?;

        self.synchronizer.sync_if_needed(&self.catalog).await
    }

    pub fn registration(&self) -> &RegistrationClient {
        &self.registration
    }

    pub fn catalog(&self) -> &GroupCatalog {
        &self.catalog
    }

    pub fn subscription_state(&self) -> Result<SubscriptionState> {
        Ok(self.preferences.subscription_state(&self.catalog)?)
    }

    pub fn last_message(&self) -> Result<Option<String>> {
        Ok(self.preferences.last_message()?)
    }

    /// Replace the selection of one origin and push it to the gateway.
    pub async fn select_groups(
        &self,
        origin: Origin,
        groups: BTreeSet<String>,
    ) -> Result<SyncReport> {
        let unknown = self.catalog.unknown_groups(origin, &groups);
        if !unknown.is_empty() {
            return Err(ClientError::UnknownGroups {
                origin,
                groups: unknown,
            });
        }

        self.preferences.set_selection(origin, &groups)?;
        self.on_preference_changed(keys::sources(origin))
            .await
            .map(Option::unwrap_or_default)
    }

    /// React to a preference written by the settings screen.
    pub async fn on_preference_changed(&self, key: &str) -> Result<Option<SyncReport>> {
        if key == keys::SOURCES_PI || key == keys::SOURCES_ESP {
            tracing::debug!("group selection changed");
            return self.sync_now().await.map(Some);
        }

        Ok(None)
    }

    /// The manual sync action, offered while the last round failed.
    pub fn sync_action_enabled(&self) -> Result<bool> {
        Ok(!self.preferences.in_sync()?)
    }

    pub async fn sync_now(&self) -> Result<SyncReport> {
        self.synchronizer.sync_groups(&self.catalog).await
    }

    pub fn on_message(&self, payload: &str) -> Delivery {
        self.relay.on_message(payload)
    }

    pub fn create_demo_notification(&self) -> Delivery {
        self.relay.replay_last()
    }

    pub fn attach_ui(&self, surface: &Arc<dyn UiSurface>) {
        self.ui.attach(surface);
    }

    pub fn detach_ui(&self) {
        self.ui.detach();
    }
}
