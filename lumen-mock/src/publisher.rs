use lumen_api::PushRequest;
use thiserror::Error;

use crate::condition::{Change, Condition};
use crate::settings::Gateway;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to encode notification: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("push request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Posts lighting changes to the push gateway.
#[derive(Debug, Clone)]
pub struct Publisher {
    client: reqwest::Client,
    gateway: Gateway,
}

impl Publisher {
    pub fn new(gateway: Gateway) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self::with_client(gateway, client))
    }

    pub fn with_client(gateway: Gateway, client: reqwest::Client) -> Self {
        Self { client, gateway }
    }

    pub fn build_request(&self, k0: i32, k1: i32, condition: &Condition) -> Result<PushRequest, PublishError> {
        let notification = condition.notification(k0, k1);

        Ok(PushRequest::for_notification(&self.gateway.sender_id, condition.groups.clone(), &notification)?
            .with_dry_run(self.gateway.dry_run)
            .with_time_to_live(self.gateway.time_to_live))
    }

    /// Push the change if it concerns any group, returning the gateway status.
    pub async fn publish(&self, change: &Change) -> Result<Option<u16>, PublishError> {
        let Some(condition) = &change.condition else {
            return Ok(None);
        };

        let request = self.build_request(change.k0, change.k1, condition)?;
        tracing::debug!("push request: {:?}", request);

        let response = self
            .client
            .post(&self.gateway.address)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::info!(
            "{} pushed to {:?}, response code: {}",
            condition.description,
            condition.groups,
            status
        );

        Ok(Some(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Thresholds, interpret};

    #[test]
    fn test_request_targets_condition_groups() {
        let publisher = Publisher::new(Gateway {
            address: "http://localhost/api/v2/push".to_string(),
            sender_id: "lumen-sender".to_string(),
            dry_run: true,
            time_to_live: 1,
        })
        .unwrap();
        let thresholds = Thresholds {
            variance: 5,
            threshold0: 10,
            threshold1: 250,
            d1: 50,
            d2: 100,
            d3: 150,
        };

        let condition = interpret(200, 300, &thresholds).unwrap();
        let request = publisher.build_request(200, 300, &condition).unwrap();

        assert_eq!(request.sender_id, "lumen-sender");
        assert!(request.gcm.dry_run);
        assert_eq!(request.gcm.groups, vec!["d1", "d2", "artificial"]);

        let notification = request.notification().unwrap();
        assert_eq!(notification.background.as_deref(), Some("ic_lightbulb_y"));
        assert_eq!(
            notification.big_text_style.big_content_title,
            "Lumen Raspi Artificial Lighting"
        );
    }
}
