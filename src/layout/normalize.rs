//! Flattening of apps into an ordered group sequence.

use crate::models::{App, Entry, EntryId, Group};

/// Flattens apps into groups in app-then-category order.
///
/// Every entry starts at `entry_height` and receives a sequential [`EntryId`].
/// Categories without shortcuts produce no group. `app_index` counts only apps
/// that produce at least one group, so an empty app takes no color slot.
pub fn normalize(apps: &[App], entry_height: f64) -> Vec<Group> {
    let mut next_id = 0;
    let mut app_index = 0;
    let mut groups = Vec::new();

    for app in apps {
        let before = groups.len();
        for shortcut_type in &app.types {
            if shortcut_type.shortcuts.is_empty() {
                continue;
            }

            let entries = shortcut_type
                .shortcuts
                .iter()
                .map(|shortcut| {
                    let entry = Entry::new(
                        EntryId(next_id),
                        shortcut.key.clone(),
                        shortcut.description.clone(),
                        entry_height,
                    );
                    next_id += 1;
                    entry
                })
                .collect();

            groups.push(Group::new(
                app.name.clone(),
                app_index,
                shortcut_type.name.clone(),
                entries,
            ));
        }
        if groups.len() > before {
            app_index += 1;
        }
    }

    groups
}
