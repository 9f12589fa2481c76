use std::sync::Arc;

use lumen_api::GroupCatalog;

use crate::error::Result;
use crate::gateway::PushPlatform;
use crate::preferences::Preferences;
use crate::settings::Gateway;
use crate::sync::{GroupSynchronizer, SyncReport};

/// Registers the device with the push platform and hands the issued token to
/// the group synchronizer.
pub struct RegistrationClient {
    platform: Arc<dyn PushPlatform>,
    gateway: Gateway,
    preferences: Preferences,
    synchronizer: Arc<GroupSynchronizer>,
    catalog: Arc<GroupCatalog>,
}

impl RegistrationClient {
    pub fn new(
        platform: Arc<dyn PushPlatform>,
        gateway: Gateway,
        preferences: Preferences,
        synchronizer: Arc<GroupSynchronizer>,
        catalog: Arc<GroupCatalog>,
    ) -> Self {
        Self {
            platform,
            gateway,
            preferences,
            synchronizer,
            catalog,
        }
    }

    /// Store `user_id` and request a device token.
    ///
    /// A platform failure is only logged; the platform reports it again through
    /// [`RegistrationClient::on_error`].
    pub async fn register(&self, user_id: &str) -> Result<()> {
        self.preferences.set_user_id(user_id)?;

        tracing::debug!(
            "requesting device token for project {} ({:?})",
            self.gateway.project_number,
            self.gateway.environment
        );
        if let Err(e) = self.platform.request_registration(&self.gateway).await {
            tracing::error!("device registration request failed: {}", e);
        }

        Ok(())
    }

    /// Called by the platform once a device token has been issued.
    pub async fn on_registered(&self, registration_id: &str) -> Result<SyncReport> {
        tracing::info!("device registered with the push platform");
        self.preferences.set_registration_id(registration_id)?;

        self.synchronizer.sync_groups(&self.catalog).await
    }

    pub fn on_error(&self, message: &str) {
        tracing::error!("push platform error: {}", message);
    }

    pub fn on_unregistered(&self, message: &str) {
        tracing::info!("device unregistered from the push platform: {}", message);
    }
}
