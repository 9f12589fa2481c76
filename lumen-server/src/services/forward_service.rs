use lumen_api::{ForwardQuery, PushRequest};

use crate::configs::Gateway;
use crate::errors::ForwardError;

/// Turns a forward query into a push request and posts it to the gateway.
#[derive(Debug, Clone)]
pub struct ForwardService {
    client: reqwest::Client,
    gateway: Gateway,
}

impl ForwardService {
    pub fn new(gateway: Gateway) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self::with_client(gateway, client))
    }

    pub fn with_client(gateway: Gateway, client: reqwest::Client) -> Self {
        Self { client, gateway }
    }

    pub fn build_request(&self, query: &ForwardQuery) -> Result<PushRequest, ForwardError> {
        Ok(query
            .to_push_request()?
            .with_dry_run(self.gateway.dry_run)
            .with_time_to_live(self.gateway.time_to_live))
    }

    /// Post the push request and return the gateway's HTTP status code.
    pub async fn forward(&self, query: &ForwardQuery) -> Result<u16, ForwardError> {
        tracing::info!("request received to send {} to {}", query.title, query.grp);

        let request = self.build_request(query)?;
        tracing::debug!("request message: {:?}", request);

        let response = self
            .client
            .post(&self.gateway.address)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::info!("sent POST request to {}, response code: {}", self.gateway.address, status);

        // The status is already known; a broken body does not change the outcome.
        match response.text().await {
            Ok(body) => tracing::debug!("gateway response: {}", body),
            Err(e) => tracing::warn!("failed to read gateway response: {}", e),
        }

        Ok(status)
    }
}
