use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{FantasyError, Result};

/// Playing role of a cricketer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "BATTER")]
    Batter,
    #[serde(rename = "WICKETKEEPER")]
    Wicketkeeper,
    #[serde(rename = "ALL-ROUNDER")]
    AllRounder,
    #[serde(rename = "BOWLER")]
    Bowler,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Batter, Role::Wicketkeeper, Role::AllRounder, Role::Bowler];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batter => "BATTER",
            Role::Wicketkeeper => "WICKETKEEPER",
            Role::AllRounder => "ALL-ROUNDER",
            Role::Bowler => "BOWLER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog record for one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerReference {
    #[serde(rename = "Player")]
    pub name: String,

    #[serde(rename = "Role")]
    pub role: Role,
}

/// Name to role lookup for every selectable player.
#[derive(Clone, Debug, Default)]
pub struct PlayerCatalog {
    roles: HashMap<String, Role>,
}

impl PlayerCatalog {
    pub fn new() -> Self {
        PlayerCatalog {
            roles: HashMap::new(),
        }
    }

    /// Read a catalog from a JSON array of `{"Player": .., "Role": ..}` records.
    /// Extra columns are ignored; an unknown role rejects the whole catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let mut catalog = PlayerCatalog::new();

        for (index, value) in raw.into_iter().enumerate() {
            let reference: PlayerReference = serde_json::from_value(value).map_err(|e| {
                FantasyError::InvalidCatalog(format!("record {}: {}", index, e))
            })?;
            catalog.insert(reference);
        }

        log::debug!("Loaded {} players into catalog", catalog.len());
        Ok(catalog)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Add or replace a player.
    pub fn insert(&mut self, reference: PlayerReference) {
        self.roles.insert(reference.name, reference.role);
    }

    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.roles.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl FromIterator<PlayerReference> for PlayerCatalog {
    fn from_iter<I: IntoIterator<Item = PlayerReference>>(iter: I) -> Self {
        let mut catalog = PlayerCatalog::new();
        for reference in iter {
            catalog.insert(reference);
        }
        catalog
    }
}
