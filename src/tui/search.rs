//! Search filtering of rendered groups.
//!
//! Terms are whitespace-separated and matched case-insensitively. An entry is
//! shown when every term occurs in its category title, or every term in its
//! key, or every term in its description. A group is shown when its title
//! matches or any of its entries is shown.

use crate::models::{Entry, Group};

/// Parsed search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    /// Splits `text` into lowercase terms.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            terms: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// True when there is nothing to filter by.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn all_in(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.terms.iter().all(|term| text.contains(term.as_str()))
    }

    /// Whether every term occurs in the group's displayed title.
    #[must_use]
    pub fn matches_title(&self, group: &Group) -> bool {
        self.all_in(&group.category_name)
    }

    /// Whether the entry is shown within a group whose title match is
    /// `title_matches`.
    #[must_use]
    pub fn shows_entry(&self, title_matches: bool, entry: &Entry) -> bool {
        title_matches || self.all_in(&entry.key) || self.all_in(&entry.description)
    }

    /// Entries of `group` left visible by the query.
    ///
    /// Returns `None` when the whole group is hidden.
    #[must_use]
    pub fn visible_entries<'a>(&self, group: &'a Group) -> Option<Vec<&'a Entry>> {
        let title_matches = self.matches_title(group);
        let entries: Vec<&Entry> = group
            .entries
            .iter()
            .filter(|e| self.shows_entry(title_matches, e))
            .collect();

        (title_matches || !entries.is_empty()).then_some(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;

    fn group() -> Group {
        Group::new(
            "Vim",
            0,
            "Window Management",
            vec![
                Entry::new(EntryId(0), "Ctrl + W S", "Split window", 1.0),
                Entry::new(EntryId(1), "Ctrl + W Q", "Close window", 1.0),
                Entry::new(EntryId(2), "Z Z", "Save and quit", 1.0),
            ],
        )
    }

    fn keys(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.key.clone()).collect()
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let query = SearchQuery::parse("   ");
        assert!(query.is_empty());
        assert_eq!(query.visible_entries(&group()).unwrap().len(), 3);
    }

    #[test]
    fn test_title_match_shows_all_entries() {
        let query = SearchQuery::parse("WINDOW man");
        assert!(query.matches_title(&group()));
        assert_eq!(query.visible_entries(&group()).unwrap().len(), 3);
    }

    #[test]
    fn test_terms_must_all_match_one_field() {
        let query = SearchQuery::parse("ctrl q");
        assert_eq!(keys(&query.visible_entries(&group()).unwrap()), vec!["Ctrl + W Q"]);

        // "split" is in a description and "ctrl" in a key: no single field has both
        let query = SearchQuery::parse("split ctrl");
        assert!(query.visible_entries(&group()).is_none());
    }

    #[test]
    fn test_description_match() {
        let query = SearchQuery::parse("quit");
        assert_eq!(keys(&query.visible_entries(&group()).unwrap()), vec!["Z Z"]);
    }

    #[test]
    fn test_continued_title_is_searchable() {
        let fragment = group().continuation(vec![Entry::new(EntryId(3), "X", "Y", 1.0)]);
        let query = SearchQuery::parse("continued");
        assert_eq!(query.visible_entries(&fragment).unwrap().len(), 1);
        assert!(query.visible_entries(&group()).is_none());
    }
}
