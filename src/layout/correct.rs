//! Height correction for entries that wrapped on render.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{EntryId, Group};

/// Promotes every flagged entry of the pre-split `groups` to double-line
/// height.
///
/// Entries are matched by their stable id, never by position. Entries already
/// promoted keep their height, so applying the same flags twice changes
/// nothing. Returns the number of entries promoted by this call.
pub fn apply_overflow_corrections(groups: &mut [Group], flagged: &BTreeSet<EntryId>) -> usize {
    if flagged.is_empty() {
        return 0;
    }

    let promoted = groups
        .iter_mut()
        .flat_map(|g| g.entries.iter_mut())
        .filter(|e| flagged.contains(&e.id))
        .map(|e| e.promote_to_double_line())
        .filter(|&changed| changed)
        .count();

    debug!(flagged = flagged.len(), promoted, "applied overflow corrections");
    promoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::normalize;
    use crate::models::{App, Shortcut, ShortcutType};

    fn sample_groups() -> Vec<Group> {
        let apps = vec![
            App {
                name: "A".to_string(),
                types: vec![
                    ShortcutType {
                        name: "x".to_string(),
                        shortcuts: vec![Shortcut::new("1", "a"), Shortcut::new("2", "b")],
                    },
                    ShortcutType {
                        name: "y".to_string(),
                        shortcuts: vec![Shortcut::new("3", "c")],
                    },
                ],
            },
            App {
                name: "B".to_string(),
                types: vec![ShortcutType {
                    name: "z".to_string(),
                    shortcuts: vec![Shortcut::new("4", "d"), Shortcut::new("5", "e")],
                }],
            },
        ];
        normalize(&apps, 20.0)
    }

    fn heights(groups: &[Group]) -> Vec<f64> {
        groups
            .iter()
            .flat_map(|g| g.entries.iter().map(|e| e.height))
            .collect()
    }

    #[test]
    fn test_empty_flags_leave_heights() {
        let mut groups = sample_groups();
        let before = groups.clone();
        assert_eq!(apply_overflow_corrections(&mut groups, &BTreeSet::new()), 0);
        assert_eq!(groups, before);
    }

    #[test]
    fn test_flagged_entries_are_doubled_across_groups() {
        let mut groups = sample_groups();
        let flagged: BTreeSet<_> = [EntryId(1), EntryId(3)].into_iter().collect();

        assert_eq!(apply_overflow_corrections(&mut groups, &flagged), 2);
        assert_eq!(heights(&groups), vec![20.0, 40.0, 20.0, 40.0, 20.0]);
    }

    #[test]
    fn test_second_application_is_a_no_op() {
        let mut groups = sample_groups();
        let flagged: BTreeSet<_> = [EntryId(0), EntryId(4)].into_iter().collect();

        apply_overflow_corrections(&mut groups, &flagged);
        let once = groups.clone();
        assert_eq!(apply_overflow_corrections(&mut groups, &flagged), 0);
        assert_eq!(groups, once);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut groups = sample_groups();
        let flagged: BTreeSet<_> = [EntryId(99)].into_iter().collect();
        assert_eq!(apply_overflow_corrections(&mut groups, &flagged), 0);
        assert_eq!(heights(&groups), vec![20.0; 5]);
    }
}
