use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sensor family a group belongs to.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Raspberry Pi light sensor
    Pi,
    /// ESP light sensor
    Esp,
}

impl Origin {
    pub const ALL: [Origin; 2] = [Origin::Pi, Origin::Esp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Pi => "pi",
            Origin::Esp => "esp",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginGroups {
    /// Every group the origin publishes to
    pub values: Vec<String>,
    /// Groups selected before the user makes a choice
    #[serde(default)]
    pub defaults: Vec<String>,
}

/// Fixed enumeration of valid subscription groups.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCatalog {
    pub pi: OriginGroups,
    pub esp: OriginGroups,
}

impl GroupCatalog {
    pub fn origin(&self, origin: Origin) -> &OriginGroups {
        match origin {
            Origin::Pi => &self.pi,
            Origin::Esp => &self.esp,
        }
    }

    /// Every catalog group, `pi` first, without duplicates.
    pub fn all_groups(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.pi
            .values
            .iter()
            .chain(self.esp.values.iter())
            .filter(|group| seen.insert(group.as_str()))
            .cloned()
            .collect()
    }

    pub fn defaults(&self, origin: Origin) -> BTreeSet<String> {
        self.origin(origin).defaults.iter().cloned().collect()
    }

    pub fn contains(&self, origin: Origin, group: &str) -> bool {
        self.origin(origin).values.iter().any(|value| value == group)
    }

    /// Groups of `groups` the origin does not know about.
    pub fn unknown_groups<'a, I>(&self, origin: Origin, groups: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        groups
            .into_iter()
            .filter(|group| !self.contains(origin, group))
            .cloned()
            .collect()
    }
}
