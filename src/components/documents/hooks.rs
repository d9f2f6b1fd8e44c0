//! Pagination state hook for the document table.

use leptos::prelude::*;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::core::paging;

/// Client-side pagination state.
///
/// The page index is treated as derived state: callers re-clamp it against
/// the collection length after every mutation, so the invariant
/// `0 <= index < page_count(len, size)` holds even when the collection
/// shrinks under the current page.
#[derive(Clone, Copy)]
pub struct PagerState {
    /// Zero-based page index.
    pub index: RwSignal<usize>,
    /// Rows per page.
    pub size: RwSignal<usize>,
}

impl PagerState {
    pub fn new() -> Self {
        Self {
            index: RwSignal::new(0),
            size: RwSignal::new(DEFAULT_PAGE_SIZE),
        }
    }

    /// Pull the index back into range for a collection of `len` rows.
    pub fn clamp(&self, len: usize) {
        let size = self.size.get_untracked();
        self.index
            .update(|index| *index = paging::clamp_index(*index, len, size));
    }

    /// Advance one page; a no-op on the last page.
    pub fn next(&self, len: usize) {
        let size = self.size.get_untracked();
        self.index.update(|index| {
            if *index + 1 < paging::page_count(len, size) {
                *index += 1;
            }
        });
    }

    /// Go back one page; a no-op on the first page.
    pub fn prev(&self) {
        self.index.update(|index| *index = index.saturating_sub(1));
    }

    /// Jump to a requested page, clamped into range.
    pub fn goto(&self, requested: usize, len: usize) {
        let size = self.size.get_untracked();
        self.index.set(paging::clamp_index(requested, len, size));
    }

    /// Jump to the last page (where freshly appended rows land).
    pub fn goto_last(&self, len: usize) {
        let size = self.size.get_untracked();
        self.index.set(paging::page_count(len, size) - 1);
    }

    /// Change the page size, re-clamping the index.
    pub fn set_size(&self, size: usize, len: usize) {
        self.size.set(size);
        self.clamp(len);
    }
}

impl Default for PagerState {
    fn default() -> Self {
        Self::new()
    }
}
