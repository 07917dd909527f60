//! Global, pagination-independent selection set.

use std::collections::{BTreeSet, HashSet};

use crate::api::types::RecordId;

/// The set of selected record IDs across every page.
///
/// This is the single source of truth for "is record X selected". The
/// selection shown for a page is always [`SelectionStore::project`] of this
/// set onto the IDs present on that page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    ids: HashSet<RecordId>,
}

impl SelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected records.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check if a record is selected.
    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterate over the selected IDs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }

    /// Add IDs to the selection. Returns how many were not already selected.
    pub fn insert_all(&mut self, ids: impl IntoIterator<Item = RecordId>) -> usize {
        ids.into_iter().filter(|id| self.ids.insert(*id)).count()
    }

    /// Apply a selection change reported for the displayed page.
    ///
    /// Every ID in `newly_selected` is added. Every ID in `current_page` that
    /// is absent from `newly_selected` is removed. IDs that are not on the
    /// current page are never removed, which is what lets the selection
    /// survive pagination.
    pub fn toggle(&mut self, current_page: &[RecordId], newly_selected: &[RecordId]) {
        let keep: HashSet<RecordId> = newly_selected.iter().copied().collect();

        for id in current_page {
            if !keep.contains(id) {
                self.ids.remove(id);
            }
        }
        self.ids.extend(keep);
    }

    /// The subset of `page` that is selected, in page order.
    pub fn project(&self, page: &[RecordId]) -> Vec<RecordId> {
        page.iter().copied().filter(|id| self.contains(*id)).collect()
    }

    /// An ordered, immutable copy of the selection.
    pub fn snapshot(&self) -> BTreeSet<RecordId> {
        self.ids.iter().copied().collect()
    }
}
