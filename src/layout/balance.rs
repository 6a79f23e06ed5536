//! Column balancing.
//!
//! Partitions an ordered group sequence into a fixed number of columns of
//! roughly equal height. Groups are filled greedily against a target height;
//! a group that would overflow its column is split at an entry boundary and
//! its remainder continues at the top of the next column.
//!
//! The target starts at `total / N` and, after every pass that leaves entries
//! unassigned, grows by `total(unassigned) / N`. The growth compounds across
//! passes. This converges in practice but is not an optimal partition: the
//! goal is columns that look about equal, and the pass count is bounded.

use std::collections::VecDeque;

use tracing::debug;

use crate::models::{total_height, Column, Group};

/// Maximum number of balancing passes.
pub const MAX_BALANCE_ITERATIONS: usize = 10;

/// Outcome of a balancing run.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    /// Exactly `column_count` columns (at least one)
    pub columns: Vec<Column>,
    /// Target height used by the final pass
    pub target_height: f64,
    /// Number of passes performed
    pub iterations: usize,
}

/// Partitions `groups` into `column_count` columns.
///
/// See [`balance`] for the algorithm; this returns only the columns.
pub fn compute_columns(groups: &[Group], column_count: usize, header_height: f64) -> Vec<Column> {
    balance(groups, column_count, header_height).columns
}

/// Runs the bounded balancing loop.
///
/// A column count of zero is treated as one. Entries still unassigned when the
/// pass bound is reached are appended to the last column, so every entry of
/// `groups` appears exactly once, in order.
pub fn balance(groups: &[Group], column_count: usize, header_height: f64) -> Balance {
    let column_count = column_count.max(1);
    let divisor = column_count as f64;

    let mut target_height = 0.0;
    let mut remaining: VecDeque<Group> = groups
        .iter()
        .filter(|g| !g.entries.is_empty())
        .cloned()
        .collect();
    let mut columns = vec![Column::default(); column_count];
    let mut iterations = 0;

    while !remaining.is_empty() && iterations < MAX_BALANCE_ITERATIONS {
        target_height += total_height(&remaining, header_height) / divisor;
        let (filled, left) = fill_columns(groups, column_count, target_height, header_height);
        columns = filled;
        remaining = left;
        iterations += 1;

        debug!(
            iteration = iterations,
            target_height,
            unassigned = remaining.len(),
            "balancing pass"
        );
    }

    if !remaining.is_empty() {
        debug!(
            unassigned = remaining.len(),
            "pass bound reached, appending unassigned groups to last column"
        );
        if let Some(last) = columns.last_mut() {
            last.groups.extend(remaining);
        }
    }

    Balance {
        columns,
        target_height,
        iterations,
    }
}

/// One greedy pass over the full, unmodified group sequence.
///
/// Returns the filled columns and whatever did not fit.
fn fill_columns(
    groups: &[Group],
    column_count: usize,
    target_height: f64,
    header_height: f64,
) -> (Vec<Column>, VecDeque<Group>) {
    let mut pending: VecDeque<Group> = groups
        .iter()
        .filter(|g| !g.entries.is_empty())
        .cloned()
        .collect();
    let mut columns = Vec::with_capacity(column_count);

    for _ in 0..column_count {
        let mut column = Column::default();
        let mut height = 0.0;

        while height < target_height {
            let Some(group) = pending.pop_front() else {
                break;
            };
            let (placed, rest) = place_group(group, &mut height, target_height, header_height);
            if let Some(rest) = rest {
                pending.push_front(rest);
            }
            column.groups.push(placed);
        }

        columns.push(column);
    }

    (columns, pending)
}

/// Places entries of `group` while `height` is below the target.
///
/// Must be called with `height < target_height`, so the first entry is always
/// placed and neither half of a split is empty. The header is charged with the
/// first entry of a fresh group only.
fn place_group(
    mut group: Group,
    height: &mut f64,
    target_height: f64,
    header_height: f64,
) -> (Group, Option<Group>) {
    let mut split_at = group.entries.len();

    for (index, entry) in group.entries.iter().enumerate() {
        if *height >= target_height {
            split_at = index;
            break;
        }
        *height += entry.height;
        if index == 0 && !group.continued {
            *height += header_height;
        }
    }

    let rest = group.entries.split_off(split_at);
    if rest.is_empty() {
        (group, None)
    } else {
        let continuation = group.continuation(rest);
        (group, Some(continuation))
    }
}
