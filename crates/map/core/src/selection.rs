//! Multi-selection over display indices of an item list.

use std::collections::BTreeSet;

/// Set of highlighted display rows.
///
/// Rows are kept ordered so iteration always runs top to bottom.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Selection {
    rows: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection containing exactly `index`.
    pub fn single_row(index: usize) -> Self {
        let mut selection = Self::new();
        selection.set_single(index);
        selection
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// The selected row when exactly one is selected.
    pub fn single(&self) -> Option<usize> {
        match self.rows.len() {
            1 => self.rows.first().copied(),
            _ => None,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.rows.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Replaces the selection with `index` alone.
    pub fn set_single(&mut self, index: usize) {
        self.rows.clear();
        self.rows.insert(index);
    }

    /// Flips `index` in or out of the selection.
    pub fn toggle(&mut self, index: usize) {
        if !self.rows.remove(&index) {
            self.rows.insert(index);
        }
    }

    pub fn insert(&mut self, index: usize) {
        self.rows.insert(index);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
