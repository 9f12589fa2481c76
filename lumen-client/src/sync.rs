use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use lumen_api::GroupCatalog;
use tokio::task::JoinSet;

use crate::error::{GatewayError, Result};
use crate::gateway::PushGateway;
use crate::preferences::Preferences;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCall {
    Unsubscribe(String),
    Subscribe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub call: SyncCall,
    pub error: GatewayError,
}

/// Outcome of one synchronization round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Groups the user was removed from
    pub unsubscribed: Vec<String>,
    /// Groups carried by the subscribe call
    pub subscribed: Vec<String>,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn in_sync(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Mirrors the local group selection onto the push gateway.
pub struct GroupSynchronizer {
    gateway: Arc<dyn PushGateway>,
    preferences: Preferences,
}

impl GroupSynchronizer {
    pub fn new(gateway: Arc<dyn PushGateway>, preferences: Preferences) -> Self {
        Self {
            gateway,
            preferences,
        }
    }

    /// Unsubscribe every group of `all_groups` missing from `selected_groups`, then
    /// subscribe `selected_groups` under the stored device token.
    ///
    /// All gateway calls run concurrently and are joined before the in-sync flag
    /// is written once from the combined outcome.
    pub async fn sync(
        &self,
        user_id: &str,
        selected_groups: &BTreeSet<String>,
        all_groups: &[String],
    ) -> Result<SyncReport> {
        let registration_id = self.preferences.registration_id()?;
        let mut calls = JoinSet::new();
        let mut pending = HashMap::new();
        let mut report = SyncReport::default();

        for group in all_groups.iter().filter(|g| !selected_groups.contains(*g)) {
            let gateway = self.gateway.clone();
            let user_id = user_id.to_string();
            let removed = group.clone();
            report.unsubscribed.push(group.clone());

            let handle = calls.spawn(async move {
                gateway.remove_user_from_group(&user_id, &removed).await
            });
            pending.insert(handle.id(), SyncCall::Unsubscribe(group.clone()));
        }

        let groups: Vec<String> = selected_groups.iter().cloned().collect();
        report.subscribed = groups.clone();
        {
            let gateway = self.gateway.clone();
            let user_id = user_id.to_string();

            let handle = calls.spawn(async move {
                gateway
                    .register_user(&user_id, &groups, &registration_id)
                    .await
            });
            pending.insert(handle.id(), SyncCall::Subscribe);
        }

        while let Some(joined) = calls.join_next_with_id().await {
            let (id, result) = match joined {
                Ok((id, result)) => (id, result),
                Err(e) => (e.id(), Err(GatewayError::new("aborted", e.to_string()))),
            };
            let Some(call) = pending.remove(&id) else {
                continue;
            };

            match result {
                Ok(()) => match &call {
                    SyncCall::Unsubscribe(group) => {
                        tracing::info!("user removed from group {}", group)
                    }
                    SyncCall::Subscribe => {
                        tracing::info!("user registered for {} groups", report.subscribed.len())
                    }
                },
                Err(error) => {
                    tracing::error!("sync call {:?} failed: {}", call, error);
                    report.failures.push(SyncFailure { call, error });
                }
            }
        }

        self.preferences.set_in_sync(report.in_sync())?;

        Ok(report)
    }

    /// Run a round for the stored user and selection.
    pub async fn sync_groups(&self, catalog: &GroupCatalog) -> Result<SyncReport> {
        let user_id = self.preferences.user_id()?;
        let selected = self.preferences.selected_groups(catalog)?;

        self.sync(&user_id, &selected, &catalog.all_groups()).await
    }

    /// Retry a previous round whose outcome was not saved.
    ///
    /// Nothing is sent before the platform issued a device token; the first
    /// round then runs from `RegistrationClient::on_registered`.
    pub async fn sync_if_needed(&self, catalog: &GroupCatalog) -> Result<Option<SyncReport>> {
        if self.preferences.in_sync()? {
            return Ok(None);
        }
        if self.preferences.registration_id()?.is_empty() {
            tracing::debug!("no device token yet, sync deferred to registration");
            return Ok(None);
        }

        tracing::info!("new sync attempt with the push gateway");
        self.sync_groups(catalog).await.map(Some)
    }
}
