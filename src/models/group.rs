//! Layout units: entries, groups of entries, and columns of groups.

use serde::Serialize;

/// Suffix appended to the category name of a continuation fragment.
pub const CONTINUATION_SUFFIX: &str = " (Continued)";

/// Stable identifier of an entry within one relayout cycle.
///
/// Assigned once during normalization as the count of entries seen so far
/// across all pre-split groups. Splitting never renumbers entries, so an id
/// reported by rendering always refers to the same shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub usize);

/// A single shortcut placed in the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Stable id, see [`EntryId`]
    pub id: EntryId,
    /// Key combination text
    pub key: String,
    /// Description text
    pub description: String,
    /// Height in layout units
    pub height: f64,
    #[serde(skip)]
    promoted: bool,
}

impl Entry {
    /// Creates an entry with a single-line height estimate.
    pub fn new(
        id: EntryId,
        key: impl Into<String>,
        description: impl Into<String>,
        line_height: f64,
    ) -> Self {
        Self {
            id,
            key: key.into(),
            description: description.into(),
            height: line_height,
            promoted: false,
        }
    }

    /// Promotes the entry to double-line height.
    ///
    /// Returns `false` if the entry was already promoted; its height is then
    /// left untouched.
    pub fn promote_to_double_line(&mut self) -> bool {
        if self.promoted {
            return false;
        }
        self.height *= 2.0;
        self.promoted = true;
        true
    }

    /// Whether the entry has been promoted to double-line height.
    #[must_use]
    pub const fn is_promoted(&self) -> bool {
        self.promoted
    }
}

/// One category of one app with its ordered entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// Application name
    pub app_name: String,
    /// Ordinal of the app among apps that produce groups, used for coloring
    pub app_index: usize,
    /// Category name, suffixed for continuation fragments
    pub category_name: String,
    /// True for the remainder of a split group
    pub continued: bool,
    /// Entries in display order
    pub entries: Vec<Entry>,
}

impl Group {
    /// Creates a fresh (non-continued) group.
    pub fn new(
        app_name: impl Into<String>,
        app_index: usize,
        category_name: impl Into<String>,
        entries: Vec<Entry>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            app_index,
            category_name: category_name.into(),
            continued: false,
            entries,
        }
    }

    /// Builds the continuation fragment holding `entries` split off this group.
    ///
    /// The suffix is appended once: continuing a continuation keeps its name.
    /// A category spread over three columns reads `Name (Continued)` in both
    /// later columns, never `Name (Continued) (Continued)`.
    #[must_use]
    pub fn continuation(&self, entries: Vec<Entry>) -> Self {
        let category_name = if self.continued {
            self.category_name.clone()
        } else {
            format!("{}{CONTINUATION_SUFFIX}", self.category_name)
        };
        Self {
            app_name: self.app_name.clone(),
            app_index: self.app_index,
            category_name,
            continued: true,
            entries,
        }
    }

    /// Sum of entry heights, without any header.
    #[must_use]
    pub fn entries_height(&self) -> f64 {
        self.entries.iter().map(|e| e.height).sum()
    }
}

/// Total height of a group sequence: every entry plus one header per group.
pub fn total_height<'a>(groups: impl IntoIterator<Item = &'a Group>, header_height: f64) -> f64 {
    groups
        .into_iter()
        .map(|g| g.entries_height() + header_height)
        .sum()
}

/// Groups assigned to one visual column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Column {
    /// Groups and fragments in display order
    pub groups: Vec<Group>,
}

impl Column {
    /// Height as charged by the balancer: every entry, plus a header for each
    /// fresh group. Continuation fragments carry no header charge.
    #[must_use]
    pub fn charged_height(&self, header_height: f64) -> f64 {
        self.groups
            .iter()
            .map(|g| {
                let header = if g.continued { 0.0 } else { header_height };
                g.entries_height() + header
            })
            .sum()
    }

    /// Iterates over all entries of the column in display order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    /// Returns true if the column holds no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: usize) -> Entry {
        Entry::new(EntryId(id), format!("K{id}"), format!("Do {id}"), 20.0)
    }

    #[test]
    fn test_promote_once() {
        let mut e = entry(0);
        assert!(e.promote_to_double_line());
        assert!((e.height - 40.0).abs() < f64::EPSILON);
        assert!(!e.promote_to_double_line());
        assert!((e.height - 40.0).abs() < f64::EPSILON);
        assert!(e.is_promoted());
    }

    #[test]
    fn test_continuation_suffix_not_stacked() {
        let group = Group::new("Vim", 0, "Motion", vec![entry(0)]);
        let first = group.continuation(vec![entry(1)]);
        assert_eq!(first.category_name, "Motion (Continued)");
        assert!(first.continued);

        let second = first.continuation(vec![entry(2)]);
        assert_eq!(second.category_name, "Motion (Continued)");
        assert_eq!(second.app_index, 0);
    }

    #[test]
    fn test_total_height_counts_one_header_per_group() {
        let groups = vec![
            Group::new("A", 0, "X", vec![entry(0), entry(1)]),
            Group::new("A", 0, "Y", vec![entry(2)]),
        ];
        assert!((total_height(&groups, 30.0) - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_column_charged_height_skips_continued_headers() {
        let group = Group::new("A", 0, "X", vec![entry(0)]);
        let rest = group.continuation(vec![entry(1)]);
        let column = Column {
            groups: vec![group, rest],
        };
        assert!((column.charged_height(30.0) - 70.0).abs() < f64::EPSILON);
        assert_eq!(column.entries().count(), 2);
    }
}
