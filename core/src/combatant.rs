//! Build snapshot of the analyzed player.
//!
//! Read once per encounter and only queried while analyzers are being
//! constructed.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub talents: HashSet<i64>,
    #[serde(default)]
    pub legendaries: HashSet<i64>,
}

impl Combatant {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_talent(mut self, talent_id: i64) -> Self {
        self.talents.insert(talent_id);
        self
    }

    pub fn with_legendary(mut self, legendary_id: i64) -> Self {
        self.legendaries.insert(legendary_id);
        self
    }

    pub fn has_talent(&self, talent_id: i64) -> bool {
        self.talents.contains(&talent_id)
    }

    pub fn has_legendary(&self, legendary_id: i64) -> bool {
        self.legendaries.contains(&legendary_id)
    }
}

pub fn parse_combatant(content: &str) -> Result<Combatant> {
    serde_json::from_str(content).map_err(Error::MalformedCombatant)
}

pub fn load_combatant<P: AsRef<Path>>(path: P) -> Result<Combatant> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_combatant(&content)
}
