use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lumen_api::{GroupCatalog, NotificationContent, OriginGroups, WearNotification};
use lumen_client::settings::{Environment, Gateway};
use lumen_client::{
    Collaborators, GatewayError, LumenClient, MemoryPreferences, PushGateway, PushPlatform,
    RenderError, Settings, UiSurface, WearableRenderer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub user_id: String,
    pub groups: Vec<String>,
    pub registration_id: String,
}

#[derive(Default)]
pub struct MockGateway {
    pub registrations: Mutex<Vec<Registration>>,
    pub removals: Mutex<Vec<(String, String)>>,
    failing_groups: Mutex<BTreeSet<String>>,
    fail_register: Mutex<bool>,
    delay_register: Mutex<Option<Duration>>,
}

impl MockGateway {
    pub fn fail_removal_of(&self, group: &str) {
        self.failing_groups.lock().unwrap().insert(group.to_string());
    }

    pub fn fail_register(&self, fail: bool) {
        *self.fail_register.lock().unwrap() = fail;
    }

    /// Make the subscribe call finish after every unsubscribe call.
    pub fn delay_register(&self, delay: Duration) {
        *self.delay_register.lock().unwrap() = Some(delay);
    }

    pub fn removed_groups(&self) -> BTreeSet<String> {
        self.removals
            .lock()
            .unwrap()
            .iter()
            .map(|(_, group)| group.clone())
            .collect()
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.registrations.lock().unwrap().clear();
        self.removals.lock().unwrap().clear();
    }
}

#[async_trait::async_trait]
impl PushGateway for MockGateway {
    async fn register_user(
        &self,
        user_id: &str,
        groups: &[String],
        registration_id: &str,
    ) -> Result<(), GatewayError> {
        let delay = *self.delay_register.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.registrations.lock().unwrap().push(Registration {
            user_id: user_id.to_string(),
            groups: groups.to_vec(),
            registration_id: registration_id.to_string(),
        });

        if *self.fail_register.lock().unwrap() {
            return Err(GatewayError::new("500", "registration rejected"));
        }
        Ok(())
    }

    async fn remove_user_from_group(&self, user_id: &str, group: &str) -> Result<(), GatewayError> {
        self.removals
            .lock()
            .unwrap()
            .push((user_id.to_string(), group.to_string()));

        if self.failing_groups.lock().unwrap().contains(group) {
            return Err(GatewayError::new("404", format!("group {group} unknown")));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockPlatform {
    pub requests: Mutex<Vec<Gateway>>,
}

#[async_trait::async_trait]
impl PushPlatform for MockPlatform {
    async fn request_registration(&self, gateway: &Gateway) -> Result<(), GatewayError> {
        self.requests.lock().unwrap().push(gateway.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockRenderer {
    pub rendered: Mutex<Vec<WearNotification>>,
}

impl WearableRenderer for MockRenderer {
    fn render(&self, notification: &WearNotification) -> Result<(), RenderError> {
        self.rendered.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockScreen {
    pub shown: Mutex<Vec<NotificationContent>>,
}

impl UiSurface for MockScreen {
    fn show_message(&self, content: &NotificationContent) {
        self.shown.lock().unwrap().push(content.clone());
    }
}

pub struct MockClient {
    pub client: LumenClient,
    pub gateway: Arc<MockGateway>,
    pub platform: Arc<MockPlatform>,
    pub renderer: Arc<MockRenderer>,
}

pub fn test_catalog() -> GroupCatalog {
    GroupCatalog {
        pi: OriginGroups {
            values: vec![
                "d1".into(),
                "d2".into(),
                "artificial".into(),
                "natural".into(),
                "dark".into(),
            ],
            defaults: vec!["natural".into(), "dark".into()],
        },
        esp: OriginGroups {
            values: vec!["esp_natural".into(), "esp_dark".into()],
            defaults: vec!["esp_dark".into()],
        },
    }
}

pub fn test_gateway() -> Gateway {
    Gateway {
        registration_url: "https://push.test".to_string(),
        sender_id: "test-sender".to_string(),
        project_number: "123456789".to_string(),
        environment: Environment::Sandbox,
    }
}

impl MockClient {
    pub fn new() -> Self {
        let gateway = Arc::new(MockGateway::default());
        let platform = Arc::new(MockPlatform::default());
        let renderer = Arc::new(MockRenderer::default());

        let client = LumenClient::new(
            Settings {
                gateway: test_gateway(),
                catalog: test_catalog(),
            },
            Collaborators {
                store: Arc::new(MemoryPreferences::new()),
                gateway: gateway.clone(),
                platform: platform.clone(),
                renderer: renderer.clone(),
            },
        );

        Self {
            client,
            gateway,
            platform,
            renderer,
        }
    }
}

pub fn groups(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}
