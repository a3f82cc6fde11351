//! Incremental search over the catalog.

use crate::models::GameRecord;

/// Whether `query` is long enough to trigger a search.
///
/// Length is counted in characters, not bytes.
pub fn is_active(query: &str, min_len: usize) -> bool {
    query.chars().count() >= min_len
}

/// Case-insensitive substring filter that preserves catalog order.
pub fn filter(games: &[GameRecord], query: &str) -> Vec<GameRecord> {
    let needle = query.to_lowercase();
    games
        .iter()
        .filter(|game| game.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<GameRecord> {
        vec![
            GameRecord::new(1, "Half-Life"),
            GameRecord::new(2, "Half-Life 2"),
            GameRecord::new(3, "Portal"),
            GameRecord::new(4, "Portal 2"),
            GameRecord::new(5, "HALF-LIFE: Alyx"),
        ]
    }

    #[test]
    fn matches_keep_catalog_order() {
        let names: Vec<_> = filter(&catalog(), "Half")
            .into_iter()
            .map(|game| game.appid)
            .collect();
        assert_eq!(names, vec![1, 2, 5]);
    }

    #[test]
    fn matching_ignores_case_on_both_sides() {
        let result = filter(&catalog(), "life 2");
        assert_eq!(result, vec![GameRecord::new(2, "Half-Life 2")]);

        let result = filter(&catalog(), "pORTAL 2");
        assert_eq!(result, vec![GameRecord::new(4, "Portal 2")]);
    }

    #[test]
    fn every_match_contains_query_and_no_match_is_missed() {
        let games = catalog();
        let query = "al";
        let result = filter(&games, query);
        for game in &result {
            assert!(game.name.to_lowercase().contains(query));
        }
        let expected = games
            .iter()
            .filter(|game| game.name.to_lowercase().contains(query))
            .count();
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn no_matches_yields_empty_result() {
        assert!(filter(&catalog(), "zzz").is_empty());
    }

    #[test]
    fn activation_counts_characters() {
        assert!(!is_active("", 3));
        assert!(!is_active("ha", 3));
        assert!(is_active("hal", 3));
        assert!(!is_active("éé", 3));
        assert!(is_active("ééé", 3));
    }
}
