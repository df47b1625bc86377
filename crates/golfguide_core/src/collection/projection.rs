//! Capped prefix projection ("top items").
//!
//! # Responsibility
//! - Keep a bounded projection equal to `source.take(TOP_ITEMS_CAP)` as the
//!   source is mutated, one change event at a time.
//!
//! # Invariants
//! - After every applied change: `top.len() == min(TOP_ITEMS_CAP, source.len())`
//!   and `top` is the prefix of `source` in order.
//! - Only `Reset` reads more than a constant number of source elements.
//! - Subscribers of the projection see one event per source change, so its
//!   observed length never passes through `TOP_ITEMS_CAP + 1` or a shortfall.
//! - An event whose indices do not fit the projection is a broken caller
//!   contract and panics; it is never patched over.

use crate::collection::observable::{
    CollectionChange, CollectionResult, IndexedSource, ObservableVec,
};

/// Maximum number of elements held by a top-items projection.
///
/// Twelve fills whole grid columns for 1, 2, 3, 4 or 6 rows.
pub const TOP_ITEMS_CAP: usize = 12;

/// Leading text of every panic raised for a projection that disagrees with
/// its source.
pub const INVARIANT_PANIC_PREFIX: &str = "top items invariant violated";

/// Applies one source change to the projection.
///
/// `change` must already be applied to `source`. Boundary patches that
/// take two steps reach `top` subscribers as a single `Reset`.
pub fn apply_change<T, S>(
    top: &mut ObservableVec<T>,
    source: &S,
    change: CollectionChange<'_, T>,
) where
    T: Clone,
    S: IndexedSource<T> + ?Sized,
{
    top.batch(|top| patch(top, source, change));
}

fn patch<T, S>(top: &mut ObservableVec<T>, source: &S, change: CollectionChange<'_, T>)
where
    T: Clone,
    S: IndexedSource<T> + ?Sized,
{
    match change {
        CollectionChange::Insert { index, value } => {
            if index < TOP_ITEMS_CAP {
                fatal_on_violation(top.insert(index, value.clone()), "insert");
                if top.len() > TOP_ITEMS_CAP {
                    fatal_on_violation(top.remove(TOP_ITEMS_CAP), "insert overflow");
                }
            }
        }
        CollectionChange::Move { from, to } => {
            if from < TOP_ITEMS_CAP && to < TOP_ITEMS_CAP {
                fatal_on_violation(top.move_item(from, to), "move");
            } else if from < TOP_ITEMS_CAP {
                // Element left the window; the new last in-window element
                // slides in at the end.
                fatal_on_violation(top.remove(from), "move out");
                if let Some(value) = source.get(TOP_ITEMS_CAP - 1) {
                    top.push(value.clone());
                }
            } else if to < TOP_ITEMS_CAP {
                let value = source_at(source, to, "move in");
                fatal_on_violation(top.insert(to, value.clone()), "move in");
                if top.len() > TOP_ITEMS_CAP {
                    fatal_on_violation(top.remove(TOP_ITEMS_CAP), "move in overflow");
                }
            }
        }
        CollectionChange::Remove { index } => {
            if index < TOP_ITEMS_CAP {
                fatal_on_violation(top.remove(index), "remove");
                if source.len() >= TOP_ITEMS_CAP {
                    let value = source_at(source, TOP_ITEMS_CAP - 1, "remove backfill");
                    top.push(value.clone());
                }
            }
        }
        CollectionChange::Replace { index, value } => {
            if index < TOP_ITEMS_CAP {
                fatal_on_violation(top.replace(index, value.clone()), "replace");
            }
        }
        CollectionChange::Reset { .. } => rebuild(top, source),
    }
}

/// Rebuilds the projection from scratch.
pub fn rebuild<T, S>(top: &mut ObservableVec<T>, source: &S)
where
    T: Clone,
    S: IndexedSource<T> + ?Sized,
{
    let count = source.len().min(TOP_ITEMS_CAP);
    let mut prefix = Vec::with_capacity(count);
    for index in 0..count {
        prefix.push(source_at(source, index, "reset").clone());
    }
    top.reset(prefix);
}

fn source_at<'s, T, S>(source: &'s S, index: usize, action: &str) -> &'s T
where
    S: IndexedSource<T> + ?Sized,
{
    match source.get(index) {
        Some(value) => value,
        None => panic!(
            "{INVARIANT_PANIC_PREFIX} during {action}: source index {index} missing (len {})",
            source.len()
        ),
    }
}

fn fatal_on_violation<R>(result: CollectionResult<R>, action: &str) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{INVARIANT_PANIC_PREFIX} during {action}: {err}"),
    }
}
