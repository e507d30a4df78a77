use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A tag collection as it arrives on the wire: either a single comma-joined
/// string (`"Python, APIs"`) or an already-split list (`["Python", "APIs"]`).
///
/// Both shapes converge to the same token set under [`Tags::tokens`], so a
/// client that sends the joined form scores identically to one that sends
/// the list form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    Joined(String),
    List(Vec<String>),
}

impl Default for Tags {
    fn default() -> Self {
        Tags::List(Vec::new())
    }
}

impl Tags {
    /// Split into display items: comma-split and trimmed, casing preserved.
    ///
    /// Splitting applies to list entries too, so `["Python, APIs"]` and
    /// `["Python", "APIs"]` produce the same items.
    pub fn items(&self) -> Vec<String> {
        match self {
            Tags::Joined(raw) => split_csv(raw),
            Tags::List(list) => list.iter().flat_map(|item| split_csv(item)).collect(),
        }
    }

    /// Canonical storage form: a single comma-joined string.
    pub fn join(&self) -> String {
        self.items().join(",")
    }

    /// Normalized token set: lowercase, trimmed, deduplicated.
    pub fn tokens(&self) -> HashSet<String> {
        self.items().iter().map(|item| item.to_lowercase()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Split a comma-joined string into trimmed, non-empty items.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join items into the canonical comma-joined storage form.
pub fn join_csv(items: &[String]) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Normalize a stored comma-joined string into a lowercase token set.
pub fn token_set(value: &str) -> HashSet<String> {
    split_csv(value)
        .iter()
        .map(|item| item.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv_trims_and_drops_empties() {
        let items = split_csv(" Python ,  , APIs,,Go ");
        assert_eq!(items, vec!["Python", "APIs", "Go"]);
    }

    #[test]
    fn test_split_csv_empty_input() {
        assert!(split_csv("").is_empty());
        assert!(split_csv("  , ,").is_empty());
    }

    #[test]
    fn test_join_csv_round_trip() {
        let joined = join_csv(&["Python".to_string(), " APIs ".to_string()]);
        assert_eq!(joined, "Python,APIs");
        assert_eq!(split_csv(&joined), vec!["Python", "APIs"]);
    }

    #[test]
    fn test_joined_and_list_forms_converge() {
        let joined = Tags::Joined("Python, APIs".to_string());
        let list = Tags::List(vec!["Python".to_string(), "APIs".to_string()]);

        assert_eq!(joined.items(), list.items());
        assert_eq!(joined.tokens(), list.tokens());
    }

    #[test]
    fn test_list_entries_with_commas_are_split() {
        let mixed = Tags::List(vec!["Python, APIs".to_string(), "Go".to_string()]);
        assert_eq!(mixed.items(), vec!["Python", "APIs", "Go"]);
    }

    #[test]
    fn test_tokens_lowercase_and_dedupe() {
        let tags = Tags::List(vec![
            "Rust".to_string(),
            "rust ".to_string(),
            "RUST".to_string(),
        ]);
        let tokens = tags.tokens();
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains("rust"));
    }

    #[test]
    fn test_untagged_deserialization() {
        let joined: Tags = serde_json::from_str("\"Python, APIs\"").unwrap();
        let list: Tags = serde_json::from_str("[\"Python\", \"APIs\"]").unwrap();
        assert_eq!(joined.tokens(), list.tokens());
    }
}
