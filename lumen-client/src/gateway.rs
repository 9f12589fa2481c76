use crate::error::GatewayError;
use crate::settings::Gateway;

/// Group membership calls of the push gateway SDK.
#[async_trait::async_trait]
pub trait PushGateway: Send + Sync {
    /// Register `user_id` under `registration_id`, subscribed to `groups`
    async fn register_user(
        &self,
        user_id: &str,
        groups: &[String],
        registration_id: &str,
    ) -> Result<(), GatewayError>;

    /// Remove `user_id` from a single group
    async fn remove_user_from_group(&self, user_id: &str, group: &str) -> Result<(), GatewayError>;
}

/// Device token issuing side of the push platform.
#[async_trait::async_trait]
pub trait PushPlatform: Send + Sync {
    /// Ask the platform for a device token under the configured sender and project.
    ///
    /// The token is delivered later through `RegistrationClient::on_registered`.
    async fn request_registration(&self, gateway: &Gateway) -> Result<(), GatewayError>;
}
