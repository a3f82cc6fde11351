//! Fixed-size pagination over search results.

use serde::{Deserialize, Serialize};

use crate::models::GameRecord;

/// How the last reachable page index is derived from the result count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageBoundary {
    /// `len / page_size`. When `len` is a multiple of `page_size` a trailing
    /// empty page is reachable.
    #[default]
    Floor,
    /// `ceil(len / page_size) - 1`, never below zero.
    Exact,
}

impl PageBoundary {
    /// Highest page index navigation may reach.
    pub fn max_page_index(self, len: usize, page_size: usize) -> usize {
        let page_size = page_size.max(1);
        match self {
            PageBoundary::Floor => len / page_size,
            PageBoundary::Exact => len.div_ceil(page_size).saturating_sub(1),
        }
    }
}

/// Slice of the results shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow<'a> {
    /// At most `page_size` records.
    pub items: &'a [GameRecord],
    /// A previous page exists.
    pub has_previous: bool,
    /// A next page exists.
    pub has_next: bool,
}

impl PageWindow<'_> {
    /// Whether the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Compute the window for `page_index`. Out-of-range indexes yield an empty window.
pub fn page(
    results: &[GameRecord],
    page_index: usize,
    page_size: usize,
    boundary: PageBoundary,
) -> PageWindow<'_> {
    let start = page_index.saturating_mul(page_size).min(results.len());
    let end = start.saturating_add(page_size).min(results.len());
    PageWindow {
        items: &results[start..end],
        has_previous: page_index > 0,
        has_next: page_index < boundary.max_page_index(results.len(), page_size),
    }
}

/// Page cursor over a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_index: usize,
    page_size: usize,
    boundary: PageBoundary,
}

impl Pager {
    /// Start at page zero.
    pub fn new(page_size: usize, boundary: PageBoundary) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            boundary,
        }
    }

    /// Current zero-based page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Go back to the first page.
    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    /// Window of `results` at the current page.
    pub fn window<'a>(&self, results: &'a [GameRecord]) -> PageWindow<'a> {
        page(results, self.page_index, self.page_size, self.boundary)
    }

    /// Advance one page if a next page exists. Returns whether the index moved.
    pub fn next(&mut self, results: &[GameRecord]) -> bool {
        if !self.window(results).has_next {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Step back one page if possible. Returns whether the index moved.
    pub fn previous(&mut self, results: &[GameRecord]) -> bool {
        if !self.window(results).has_previous {
            return false;
        }
        self.page_index -= 1;
        true
    }
}
