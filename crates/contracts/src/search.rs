//! Free-text filtering over the loaded catalogue.

use crate::listing::Listing;

/// Trait for types that can be matched against a search query.
pub trait Searchable {
    /// `query` arrives already trimmed and lowercased.
    fn matches_query(&self, query: &str) -> bool;
}

impl Searchable for Listing {
    /// A listing matches when its city or its title contains the query.
    fn matches_query(&self, query: &str) -> bool {
        self.city.to_lowercase().contains(query) || self.title.to_lowercase().contains(query)
    }
}

/// Trims and case-folds the raw input into the canonical query form.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Filters a list by a search query. An empty (or whitespace-only) query
/// returns the full list; matches keep their original order.
pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = normalize_query(query);
    if query.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_query(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, title: &str, city: &str) -> Listing {
        serde_json::from_str(&format!(
            r#"{{"id": {}, "titre": "{}", "ville": "{}"}}"#,
            id, title, city
        ))
        .unwrap()
    }

    fn catalogue() -> Vec<Listing> {
        vec![
            listing(1, "Cabane perchée en forêt", "Lyon"),
            listing(2, "Loft avec vue", "Paris"),
            listing(3, "Chalet du lac", "Annecy"),
            listing(4, "Studio Lyon centre", "Villeurbanne"),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let items = catalogue();
        assert_eq!(filter_items(&items, ""), items);
        assert_eq!(filter_items(&items, "   "), items);
    }

    #[test]
    fn test_matches_city_or_title() {
        let items = catalogue();
        let hits = filter_items(&items, "lyon");
        // id 1 by city, id 4 by title
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id_string(), "1");
        assert_eq!(hits[1].id_string(), "4");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let items = catalogue();
        assert_eq!(filter_items(&items, "  PARIS "), filter_items(&items, "paris"));
        assert_eq!(filter_items(&items, "PARIS")[0].id_string(), "2");
    }

    #[test]
    fn test_preserves_order_as_subsequence() {
        let items = catalogue();
        let hits = filter_items(&items, "a");
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| items.iter().position(|i| i == h).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = catalogue();
        let once = filter_items(&items, "chalet");
        let twice = filter_items(&once, "chalet");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_items(&catalogue(), "biarritz").is_empty());
    }
}
