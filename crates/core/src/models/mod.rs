//! Shared domain models.

use serde::{Deserialize, Serialize};

/// A single entry of the Steam app catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Steam application id.
    pub appid: u64,
    /// Display name as published by Steam.
    pub name: String,
}

impl GameRecord {
    /// Build a record from its parts.
    pub fn new(appid: u64, name: impl Into<String>) -> Self {
        Self {
            appid,
            name: name.into(),
        }
    }

    /// Id in the textual form used by the favorites file.
    pub fn id_string(&self) -> String {
        self.appid.to_string()
    }
}
