//! In-memory Steam app catalog.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{models::GameRecord, search};

/// Immutable list of known games, fetched once per run and cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Arc<Vec<GameRecord>>,
    fetched_at: Option<DateTime<Utc>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            games: Arc::new(Vec::new()),
            fetched_at: None,
        }
    }
}

impl Catalog {
    /// Wrap a freshly fetched game list.
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self {
            games: Arc::new(games),
            fetched_at: Some(Utc::now()),
        }
    }

    /// All records in catalog order.
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the catalog has no records (not loaded yet, or an empty payload).
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// When the list was fetched, if it was.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Games whose name contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<GameRecord> {
        search::filter(&self.games, query)
    }

    /// Id of the first game whose name equals `name` ignoring case.
    pub fn appid_by_name(&self, name: &str) -> Option<u64> {
        let needle = name.to_lowercase();
        self.games
            .iter()
            .find(|game| game.name.to_lowercase() == needle)
            .map(|game| game.appid)
    }

    /// Name of the first game whose id, rendered as text, equals `id`.
    pub fn name_by_id(&self, id: &str) -> Option<&str> {
        self.games
            .iter()
            .find(|game| game.appid.to_string() == id)
            .map(|game| game.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            GameRecord::new(70, "Half-Life"),
            GameRecord::new(220, "Half-Life 2"),
            GameRecord::new(221, "half-life"),
            GameRecord::new(730, "Counter-Strike 2"),
        ])
    }

    #[test]
    fn name_lookup_returns_first_case_insensitive_match() {
        let catalog = sample();
        assert_eq!(catalog.appid_by_name("HALF-LIFE"), Some(70));
        assert_eq!(catalog.appid_by_name("counter-strike 2"), Some(730));
        assert_eq!(catalog.appid_by_name("Half"), None);
    }

    #[test]
    fn id_lookup_compares_textual_ids() {
        let catalog = sample();
        assert_eq!(catalog.name_by_id("220"), Some("Half-Life 2"));
        assert_eq!(catalog.name_by_id("999"), None);
        assert_eq!(catalog.name_by_id("None"), None);
        assert_eq!(catalog.name_by_id(""), None);
        assert_eq!(catalog.name_by_id("220 "), None);
        assert_eq!(catalog.name_by_id(" 220"), None);
    }

    #[test]
    fn default_catalog_is_empty_and_unfetched() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.fetched_at().is_none());
        assert!(sample().fetched_at().is_some());
    }
}
