use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use lumen_api::{GroupCatalog, Origin};
use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

pub mod keys {
    use lumen_api::Origin;

    pub const USER_ID: &str = "userid";
    pub const SYNC: &str = "sync";
    pub const LAST_MESSAGE: &str = "lastMsg";
    pub const REGISTRATION_ID: &str = "registration_id";
    pub const SOURCES_PI: &str = "sources_pi";
    pub const SOURCES_ESP: &str = "sources_esp";

    pub fn sources(origin: Origin) -> &'static str {
        match origin {
            Origin::Pi => SOURCES_PI,
            Origin::Esp => SOURCES_ESP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    String(String),
    StringSet(BTreeSet<String>),
}

/// Key/value storage backing the device preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError>;

    fn put(&self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<BTreeMap<String, PreferenceValue>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError> {
        let values = self.values.read().map_err(|_| PreferenceError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError> {
        let mut values = self.values.write().map_err(|_| PreferenceError::Poisoned)?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Preferences kept in a JSON file, rewritten on every change.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: RwLock<BTreeMap<String, PreferenceValue>>,
}

impl FilePreferences {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            serde_json::from_slice(&fs::read(&path)?)?
        } else {
            BTreeMap::new()
        };

        tracing::debug!("loaded {} preferences from {}", values.len(), path.display());

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError> {
        let values = self.values.read().map_err(|_| PreferenceError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError> {
        let mut values = self.values.write().map_err(|_| PreferenceError::Poisoned)?;
        values.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&*values)?)?;

        Ok(())
    }
}

/// Device-side subscription state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionState {
    pub user_id: String,
    pub selected_groups: BTreeSet<String>,
    pub in_sync: bool,
}

/// Typed access to the keys Lumen keeps in its preference store.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub fn user_id(&self) -> Result<String, PreferenceError> {
        Ok(self.get_string(keys::USER_ID)?.unwrap_or_default())
    }

    pub fn set_user_id(&self, user_id: &str) -> Result<(), PreferenceError> {
        self.store
            .put(keys::USER_ID, PreferenceValue::String(user_id.to_string()))
    }

    pub fn in_sync(&self) -> Result<bool, PreferenceError> {
        match self.store.get(keys::SYNC)? {
            Some(PreferenceValue::Bool(in_sync)) => Ok(in_sync),
            _ => Ok(false),
        }
    }

    pub fn set_in_sync(&self, in_sync: bool) -> Result<(), PreferenceError> {
        self.store.put(keys::SYNC, PreferenceValue::Bool(in_sync))?;
        if !in_sync {
            tracing::info!("in-sync flag has been set to false");
        }
        Ok(())
    }

    /// Stored selection of `origin`, or the catalog defaults if nothing was stored yet.
    ///
    /// Stored groups the catalog no longer lists are left out.
    pub fn selection(
        &self,
        origin: Origin,
        catalog: &GroupCatalog,
    ) -> Result<BTreeSet<String>, PreferenceError> {
        let groups = match self.store.get(keys::sources(origin))? {
            Some(PreferenceValue::StringSet(groups)) => groups,
            _ => return Ok(catalog.defaults(origin)),
        };

        let (known, unknown): (BTreeSet<String>, BTreeSet<String>) = groups
            .into_iter()
            .partition(|group| catalog.contains(origin, group));
        if !unknown.is_empty() {
            tracing::warn!("ignoring stored {} groups missing from the catalog: {:?}", origin, unknown);
        }

        Ok(known)
    }

    pub fn set_selection(
        &self,
        origin: Origin,
        groups: &BTreeSet<String>,
    ) -> Result<(), PreferenceError> {
        self.store.put(
            keys::sources(origin),
            PreferenceValue::StringSet(groups.clone()),
        )
    }

    pub fn selected_groups(
        &self,
        catalog: &GroupCatalog,
    ) -> Result<BTreeSet<String>, PreferenceError> {
        let mut groups = BTreeSet::new();
        for origin in Origin::ALL {
            groups.extend(self.selection(origin, catalog)?);
        }
        Ok(groups)
    }

    pub fn last_message(&self) -> Result<Option<String>, PreferenceError> {
        self.get_string(keys::LAST_MESSAGE)
    }

    pub fn set_last_message(&self, message: &str) -> Result<(), PreferenceError> {
        self.store
            .put(keys::LAST_MESSAGE, PreferenceValue::String(message.to_string()))
    }

    pub fn registration_id(&self) -> Result<String, PreferenceError> {
        Ok(self.get_string(keys::REGISTRATION_ID)?.unwrap_or_default())
    }

    pub fn set_registration_id(&self, registration_id: &str) -> Result<(), PreferenceError> {
        self.store.put(
            keys::REGISTRATION_ID,
            PreferenceValue::String(registration_id.to_string()),
        )
    }

    pub fn subscription_state(
        &self,
        catalog: &GroupCatalog,
    ) -> Result<SubscriptionState, PreferenceError> {
        Ok(SubscriptionState {
            user_id: self.user_id()?,
            selected_groups: self.selected_groups(catalog)?,
            in_sync: self.in_sync()?,
        })
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        match self.store.get(key)? {
            Some(PreferenceValue::String(value)) => Ok(Some(value)),
            _ => Ok(None),
        }
    }
}
